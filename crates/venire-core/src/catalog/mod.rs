//! The signal and persona catalog: the static, pre-authored registry the
//! engine scores against. Read-only at match time.

pub mod persona;
pub mod signal;

pub use persona::{Persona, PersonaCatalog, PersonaSignalWeight};
pub use signal::{parse_bool, Signal, SignalCategory, SignalValue, ValueKind};
