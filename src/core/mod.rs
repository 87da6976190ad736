pub mod band_scale;
pub mod join;
pub mod record;
pub mod scale;
pub mod tick_format;
pub mod transition;
pub mod types;

pub use band_scale::{BandScale, DEFAULT_BAND_PADDING};
pub use join::{JoinKey, JoinPlan, join_keys, plan_join};
pub use record::{FieldValue, MISSING_CATEGORY, Record};
pub use scale::{DEFAULT_TICK_COUNT, LinearScale, TickValues};
pub use tick_format::SiFormat;
pub use transition::{Animated, Easing, Interpolate, Transition};
pub use types::{InnerArea, Margins, Viewport};
