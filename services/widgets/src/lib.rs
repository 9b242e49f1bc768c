// Library interface for the randomizer widgets - exposes modules for the host and tests

pub mod coin_flip;
pub mod events;
pub mod name_picker;
pub mod navigation;
pub mod page;
pub mod random;
pub mod range_randomizer;
pub mod render;

pub use coin_flip::{CoinFlipEngine, FlipState, PendingFlip};
pub use events::HostEvent;
pub use name_picker::{parse_names, NamePicker, PickOutcome, Winner};
pub use navigation::Navigation;
pub use page::{Page, PageOptions, PageOutput};
pub use random::{RandomSource, ScriptedRandom, StdRandom};
pub use range_randomizer::{RangeError, RangeRandomizer};
pub use render::{DisplayInstruction, ListItem};
