use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Default,
    Minimal,
    Classic,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Minimal => "minimal",
            Theme::Classic => "classic",
        }
    }

    pub fn class(&self, widget: &str) -> String {
        format!("{self}__{widget}")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
