//! Disclosure revealing.
//!
//! Native `<details>` elements are the one kind of collapsed container that
//! can be opened without running page scripts or triggering navigation, so
//! they are the only elements this crate ever mutates. Everything else is
//! read through text content, which already includes collapsed subtrees.

use dom_query::Document;

use crate::dom;
use crate::patterns::CLOSED_DISCLOSURE_SELECTOR;

/// Open every closed `<details>` element. Returns how many were opened.
///
/// Safe to call repeatedly: a second call finds nothing closed.
pub fn reveal_disclosures(doc: &Document) -> usize {
    let closed = dom::select_all(doc, CLOSED_DISCLOSURE_SELECTOR);
    for details in &closed {
        dom::open_disclosure(details);
    }
    closed.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_only_closed_details() {
        let doc = dom::parse(
            r#"<details><summary>A</summary>a</details>
               <details open><summary>B</summary>b</details>
               <details><summary>C</summary>c</details>"#,
        );
        assert_eq!(reveal_disclosures(&doc), 2);
        assert_eq!(doc.select("details[open]").length(), 3);
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let doc = dom::parse("<details><summary>Care</summary>Wash cold</details>");
        assert_eq!(reveal_disclosures(&doc), 1);
        assert_eq!(reveal_disclosures(&doc), 0);
    }

    #[test]
    fn page_without_details_is_fine() {
        let doc = dom::parse("<p>No disclosures here</p>");
        assert_eq!(reveal_disclosures(&doc), 0);
    }

    #[test]
    fn leaves_other_collapsibles_untouched() {
        let doc = dom::parse(r#"<div class="accordion" aria-expanded="false" hidden>Body</div>"#);
        reveal_disclosures(&doc);
        let div = doc.select("div");
        assert_eq!(dom::get_attribute(&div, "aria-expanded").as_deref(), Some("false"));
        assert!(div.has_attr("hidden"));
    }
}
