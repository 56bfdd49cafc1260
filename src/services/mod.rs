pub mod output;
pub mod profiler;
pub mod readers;
