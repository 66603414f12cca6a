pub const SITE_NAME: &str = "Journalboard";
