// Page structure the wasm module binds to.

// Element whose box defines the container size and local coordinate space
pub const CONTAINER_ID: &str = "viewer";
// Element carrying the circular mask
pub const LENS_ID: &str = "binocular";

// CSS custom properties written by the render sink (values in px)
pub const CSS_VAR_X: &str = "--viewport-x";
pub const CSS_VAR_Y: &str = "--viewport-y";
pub const CSS_VAR_R: &str = "--viewport-r";
