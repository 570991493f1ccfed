#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cancel;
pub mod codes;
pub mod config;
pub mod error;
pub mod observer;
pub mod output;
pub mod transform;
pub mod walker;
pub mod worker;

pub use cancel::StopFlag;
pub use codes::{color_code, slot_code};
pub use config::Config;
pub use error::RenameError;
pub use observer::{ChannelObserver, RenameEvent, RenameObserver};
pub use output::{render_plan_table, OutputFormat, OutputFormatter, PlanResult, RenameResult};
pub use transform::{transform, ParsedName};
pub use walker::{destination_for, plan, progress_percent, PlannedRename, Renamer, WalkSummary};
