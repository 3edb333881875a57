pub mod stroke_log;
