//! HTML rendering for the diagnostic detail fragment
//!
//! Output is an embeddable fragment, not a document: the host drops it
//! into its own diagnostic panel. Mod and file names are host-controlled
//! and are rendered verbatim, without HTML escaping.

use crate::host::api::Catalog;

/// Inline styles for the mod/file table. The `even` row class is part of
/// the contract; the host stylesheet may or may not pick it up.
pub(crate) const TABLE_STYLE: &str =
    "<style>th {text-align: left;} th, td {padding: 0 2ex 1ex 0;}</style>";

/// CSS class applied to every second data row
pub(crate) const EVEN_TR_CLASS: &str = "even";

/// Wrap a description in a paragraph when its trimmed form starts with a
/// `<p` fragment, so leading inline styling renders correctly once the
/// fragment is embedded. Anything else is taken as-is; callers are
/// responsible for providing valid embeddable markup.
pub(crate) fn wrap_leading_paragraph(description: &str) -> String {
    if description.trim_start().starts_with("<p") {
        format!("<p>{}</p>", description)
    } else {
        description.to_string()
    }
}

/// Two-column table of mod -> files pairs. Pairs must already be sorted by
/// the caller; file order within a mod is preserved. Rows alternate
/// `even_tr_class` starting with the first data row unmarked.
pub(crate) fn mod_file_table(
    catalog: &Catalog,
    pairs: &[(&String, &Vec<String>)],
    even_tr_class: &str,
) -> String {
    let mut html = String::from("<table><tr><th>");
    html.push_str(catalog.text("diagnose.table.mod", "Mod"));
    html.push_str("</th><th>");
    html.push_str(catalog.text("diagnose.table.file", "File"));
    html.push_str("</th></tr>");

    let mut even = false;
    for (mod_name, files) in pairs {
        if even && !even_tr_class.is_empty() {
            html.push_str(&format!("<tr class=\"{}\">", even_tr_class));
        } else {
            html.push_str("<tr>");
        }
        even = !even;

        html.push_str(&format!(
            "<td>{}</td><td>{}</td></tr>",
            mod_name,
            files.join("<br>")
        ));
    }

    html.push_str("</table>");
    html
}

/// Assemble the full detail fragment: styles, the requirement line, the
/// (possibly paragraph-wrapped) description, and the evidence table.
pub(crate) fn problem_fragment(
    catalog: &Catalog,
    requirement_name: &str,
    description: &str,
    pairs: &[(&String, &Vec<String>)],
) -> String {
    format!(
        "{}<p>{}</p>{}<p>{}</p>",
        TABLE_STYLE,
        catalog.format("diagnose.requirement", "Requirement: {0}", requirement_name),
        description,
        mod_file_table(catalog, pairs, EVEN_TR_CLASS)
    )
}
