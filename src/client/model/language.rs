/// Display language for article titles and summaries.
///
/// Provided app-wide as a `Signal<Language>` context. Switching to Chinese only changes
/// fields that have a translation; untranslated articles keep their original text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    pub fn is_chinese(&self) -> bool {
        matches!(self, Self::Chinese)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::English => Self::Chinese,
            Self::Chinese => Self::English,
        }
    }

    /// Label of the toggle button, naming the language it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::English => "中文",
            Self::Chinese => "EN",
        }
    }
}
