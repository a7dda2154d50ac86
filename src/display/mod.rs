pub mod display_options;
pub mod markup;
pub mod pagination;
pub mod surface;
pub mod table;

pub use display_options::{DisplayOptions, OutputFormat, is_interactive_terminal};
pub use markup::{Binding, Control, Controls, Markup};
pub use pagination::{PageInfo, page_count};
pub use surface::{MemorySurface, Region, RegionSelectors, Surface};
pub use table::TableDisplay;
