//! Message handlers, split by concern as `impl App` blocks.

mod browse;
mod device;
mod edit;
