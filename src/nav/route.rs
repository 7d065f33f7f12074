/// Client-side routes, as far as navigation cares about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, composed of every section.
    Home,
    /// `/projects`, the full project listing.
    Projects,
    /// Anything else (rendered as not found).
    Other,
}

impl Route {
    pub fn from_path(pathname: &str) -> Self {
        match pathname.trim_end_matches('/') {
            "" => Self::Home,
            "/projects" => Self::Projects,
            _ => Self::Other,
        }
    }

    /// Only the home route lays out sections to scroll between.
    pub fn has_sections(self) -> bool {
        self == Self::Home
    }
}
