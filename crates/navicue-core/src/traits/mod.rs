mod outcome_sink;

pub use outcome_sink::IOutcomeSink;
