// DOM mount points and presentation tuning for the web front-end.

// Default mount points
pub const CONTAINER_ID: &str = "parallaxContainer";
pub const IMAGE_LAYER_ID: &str = "parallaxImage";
pub const MASK_LAYER_ID: &str = "imageMask";

// Layers inside a container can also be tagged with data-reveal-layer="image|mask"
pub const LAYER_ATTR: &str = "data-reveal-layer";
pub const IMAGE_ROLE: &str = "image";
pub const MASK_ROLE: &str = "mask";
pub const MOUNTED_ATTR: &str = "data-reveal-mounted";

// Configuration attributes read from the container
pub const ATTR_MODE: &str = "data-mode";
pub const ATTR_MAX_ROTATION: &str = "data-max-rotation";
pub const ATTR_REVEAL_RADIUS: &str = "data-reveal-radius";
pub const ATTR_TRANSLATE_SCALE: &str = "data-translate-scale";
pub const ATTR_DEPTH_SCALE: &str = "data-depth-scale";
pub const ATTR_BASE_DEPTH: &str = "data-base-depth";
pub const ATTR_MASK_EDGE: &str = "data-mask-edge";
pub const ATTR_CLAMP_POINTER: &str = "data-clamp-pointer";
pub const ATTR_TRANSITION_MS: &str = "data-transition-ms";
pub const ATTR_PERSPECTIVE: &str = "data-perspective";
pub const ATTR_TRANSFORM_FORMAT: &str = "data-transform-format";
pub const ATTR_IMAGE_SRC: &str = "data-image-src";

// Presentation-side smoothing and 3D context
pub const DEFAULT_TRANSITION_MS: f64 = 100.0; // transform eases out over 0.1s
pub const DEFAULT_PERSPECTIVE_PX: f64 = 1000.0;

// Colours
pub const MASK_COLOR: &str = "black"; // opaque part of the mask hides the image
pub const SHADOW_RGB: [u8; 3] = [0, 0, 0];

// Digits kept when writing numbers into CSS
pub const CSS_DECIMALS: i32 = 3;
