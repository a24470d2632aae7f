use web_sys::{Document, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Browser tab title for a page title.
#[must_use]
pub fn tab_title(page_title: &str) -> String {
    format!("{page_title} · Zodiac admin")
}

/// Show the current page in the browser tab.
pub fn set_page_title(page_title: &str) {
    document().set_title(&tab_title(page_title));
}

#[cfg(test)]
mod tests {
    use super::tab_title;

    #[test]
    fn tab_title_names_the_panel() {
        assert_eq!(tab_title("🧩 Quizzes"), "🧩 Quizzes · Zodiac admin");
    }
}
