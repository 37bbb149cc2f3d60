//! Engine settings - explicit configuration handed to the code generator
//! and the valuation engine.

mod settings_model;


pub use settings_model::{CodeSettings, EngineSettings, SequenceScope, ValuationSettings};
