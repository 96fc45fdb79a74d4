//! Index page rendering.
//!
//! ```html
//! <html>
//! <head>
//! <title>Glossary</title>
//! </head>
//! <body>
//! <h2>Glossary</h2>
//! <hr>
//! <h3>Index</h3>
//! <ul>
//! <li><a href=Alpha.html>Alpha</a></li>
//! </ul>
//! </body>
//! </html>
//! ```

use super::{page_file_name, push_line};
use crate::glossary::Glossary;

const HEADER: &[&str] = &[
    "<html>",
    "<head>",
    "<title>Glossary</title>",
    "</head>",
    "<body>",
    "<h2>Glossary</h2>",
    "<hr>",
    "<h3>Index</h3>",
    "<ul>",
];

const FOOTER: &[&str] = &["</ul>", "</body>", "</html>"];

/// Render the index page listing every term in sorted order.
pub fn render_index(glossary: &Glossary) -> String {
    let terms = glossary.sorted_terms();
    let mut html = String::with_capacity(256 + terms.len() * 48);

    HEADER.iter().for_each(|line| push_line(&mut html, line));
    for term in terms {
        push_line(&mut html, &list_item(term));
    }
    FOOTER.iter().for_each(|line| push_line(&mut html, line));

    html
}

/// `<li>` entry linking to a term page.
fn list_item(term: &str) -> String {
    format!("<li><a href={}>{term}</a></li>", page_file_name(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glossary::{DuplicatePolicy, parse};

    fn glossary(text: &str) -> Glossary {
        parse(text, DuplicatePolicy::Reject).unwrap()
    }

    #[test]
    fn test_list_item() {
        assert_eq!(list_item("Alpha"), "<li><a href=Alpha.html>Alpha</a></li>");
    }

    #[test]
    fn test_index_sorted() {
        let html = render_index(&glossary("B\nsecond\n\nA\nfirst\n"));
        let a = html.find("<li><a href=A.html>A</a></li>").unwrap();
        let b = html.find("<li><a href=B.html>B</a></li>").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_index_exact_output() {
        let html = render_index(&glossary("zeta\nz\n\nalpha\na\n"));
        let expected = "\
<html>
<head>
<title>Glossary</title>
</head>
<body>
<h2>Glossary</h2>
<hr>
<h3>Index</h3>
<ul>
<li><a href=alpha.html>alpha</a></li>
<li><a href=zeta.html>zeta</a></li>
</ul>
</body>
</html>
";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_index_empty_glossary() {
        let html = render_index(&Glossary::default());
        assert!(html.contains("<ul>\n</ul>"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_index_does_not_link_definitions() {
        let html = render_index(&glossary("A\nmentions B\n\nB\nplain\n"));
        assert!(!html.contains("mentions"));
        assert_eq!(html.matches("<li>").count(), 2);
    }
}
