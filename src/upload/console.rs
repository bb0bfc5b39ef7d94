use crate::upload::types::StatusClass;
use crate::upload::view::StatusView;
use log::debug;

/// Prints status lines for the headless `submit` command.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl StatusView for ConsoleView {
    fn set_status(&mut self, text: &str, class: StatusClass) {
        match class {
            StatusClass::Error => eprintln!("❌ {}", text),
            StatusClass::Success => println!("✅ {}", text),
            StatusClass::Neutral => println!("📤 {}", text),
        }
    }

    fn set_loading(&mut self, loading: bool) {
        debug!("Loading: {}", loading);
    }
}
