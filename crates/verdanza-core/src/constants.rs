use std::time::Duration;

// Motion tuning constants shared by the web front-end and the native sim.

// Frame timing
pub const MAX_FRAME_DT: Duration = Duration::from_millis(100); // cap after a backgrounded tab

// Spring rest detection
pub const REST_DELTA: f32 = 0.01; // px
pub const REST_SPEED: f32 = 0.01; // px per second

// Cursor spotlight spring (stiffness, damping, mass)
pub const SPOTLIGHT_STIFFNESS: f32 = 100.0;
pub const SPOTLIGHT_DAMPING: f32 = 20.0;
pub const SPOTLIGHT_MASS: f32 = 0.5;
pub const SPOTLIGHT_RADIUS_PX: f32 = 600.0;
pub const SPOTLIGHT_ALPHA: f32 = 0.15;
pub const SPOTLIGHT_FADE_PERCENT: f32 = 80.0;
pub const SPOTLIGHT_RGB: [u8; 3] = [74, 222, 128];

// Scroll smoothing spring feeding the parallax mapping
pub const SCROLL_SPRING_STIFFNESS: f32 = 100.0;
pub const SCROLL_SPRING_DAMPING: f32 = 30.0;
pub const SCROLL_SPRING_MASS: f32 = 1.0;

// Continuous scroll driver
pub const SCROLL_LERP_RATE: f32 = 6.3; // per second, ~0.1 per frame at 60 Hz
pub const SCROLL_WHEEL_MULTIPLIER: f32 = 1.0;
pub const SCROLL_SNAP_PX: f32 = 0.5;

// Entrance reveal
pub const REVEAL_CLOSED: f32 = -20.0; // solid cover
pub const REVEAL_OPEN: f32 = 150.0; // mask fully dissolved
pub const ENTRANCE_DELAY: Duration = Duration::from_millis(300);
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(2200);

// Navbar
pub const NAVBAR_FOLD_MARGIN_PX: f32 = 100.0; // home navbar appears this far above the fold
pub const NAVBAR_CONDENSE_AFTER_PX: f32 = 20.0;
pub const NAVBAR_SLIDE_FROM_PX: f32 = -100.0;
pub const NAVBAR_SLIDE_DURATION: Duration = Duration::from_millis(500);

// Home background parallax
pub const HOME_SCROLL_SPAN_PX: f32 = 800.0;
pub const HOME_TRANSLATE_MAX_PX: f32 = 200.0;
pub const HOME_SCALE_MAX: f32 = 1.15;
pub const HOME_FADE_SPAN_PX: f32 = 600.0;
pub const HOME_BLUR_MAX_PX: f32 = 8.0;
pub const HOME_OVERLAY_MAX: f32 = 0.55;

// Solution page backgrounds (milder)
pub const SOLUTION_SCROLL_SPAN_PX: f32 = 600.0;
pub const SOLUTION_TRANSLATE_MAX_PX: f32 = 120.0;
pub const SOLUTION_SCALE_MAX: f32 = 1.08;
pub const SOLUTION_BLUR_MAX_PX: f32 = 4.0;
pub const SOLUTION_OVERLAY_MAX: f32 = 0.35;
pub const SOLUTION_MASK_FROM: f32 = 60.0; // partially open at the top of the page
