use crate::utils::error::Result;

/// Line-oriented console: the only way exercises talk to the learner.
pub trait Console {
    /// Shows `message` without a newline and returns the next line, trimmed.
    fn prompt(&mut self, message: &str) -> Result<String>;

    fn say(&mut self, line: &str) -> Result<()>;

    fn blank(&mut self) -> Result<()> {
        self.say("")
    }
}

pub trait Exercise {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn run(&self, console: &mut dyn Console) -> Result<()>;
}

pub trait ConfigProvider {
    /// Catalog JSON to load instead of the embedded one.
    fn catalog_path(&self) -> Option<&str>;
    /// Directory for lesson files; `None` means the embedded copies.
    fn assets_root(&self) -> Option<&str>;
    fn max_name_attempts(&self) -> Option<u32>;
    fn log_level(&self) -> Option<&str>;
}
