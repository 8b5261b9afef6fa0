//! Mapping of the main document part (`w:document`) to model blocks.

use super::xml::XmlElement;
use crate::error::{Error, Result};
use crate::model::{Block, ListInfo, Paragraph, Table, TableCell, TableRow, TextRun, TextStyle};

/// Inline containers whose runs belong to the enclosing paragraph.
const INLINE_WRAPPERS: &[&str] = &["hyperlink", "ins", "smartTag", "customXml", "fldSimple"];

/// Map the root of the main document part to body blocks.
pub fn parse_body(root: &XmlElement, part: &str) -> Result<Vec<Block>> {
    if root.local_name() != "document" {
        return Err(Error::InvalidPart {
            part: part.to_string(),
            reason: format!("unexpected root element {}", root.name),
        });
    }

    let Some(body) = root.child("body") else {
        return Err(Error::InvalidPart {
            part: part.to_string(),
            reason: "no body element".to_string(),
        });
    };

    Ok(body.elements().map(parse_block).collect())
}

fn parse_block(element: &XmlElement) -> Block {
    match element.local_name() {
        "p" => Block::Paragraph(parse_paragraph(element)),
        "tbl" => Block::Table(parse_table(element)),
        "sectPr" => Block::SectionBreak,
        _ => Block::other(element.name.as_str()),
    }
}

fn parse_paragraph(p: &XmlElement) -> Paragraph {
    let ppr = p.child("pPr");

    let style_id = ppr
        .and_then(|ppr| ppr.child("pStyle"))
        .and_then(|style| style.attr("val"))
        .map(str::to_string);

    let list_info = ppr.and_then(|ppr| ppr.child("numPr")).and_then(|num_pr| {
        let num_id = num_pr.child("numId")?;
        let level = num_pr
            .child("ilvl")
            .and_then(|ilvl| ilvl.attr("val"))
            .and_then(|v| v.trim().parse::<u8>().ok())
            .unwrap_or(0);
        Some(ListInfo::new(num_id.attr("val").unwrap_or_default(), level))
    });

    let mut runs = Vec::new();
    collect_runs(p, &mut runs);

    Paragraph {
        runs,
        style_id,
        list_info,
    }
}

fn collect_runs(container: &XmlElement, runs: &mut Vec<TextRun>) {
    for child in container.elements() {
        match child.local_name() {
            "r" => runs.push(parse_run(child)),
            name if INLINE_WRAPPERS.contains(&name) => collect_runs(child, runs),
            _ => {}
        }
    }
}

fn parse_run(r: &XmlElement) -> TextRun {
    let rpr = r.child("rPr");
    let style = TextStyle {
        bold: rpr.and_then(|rpr| rpr.child("b")).map(is_on).unwrap_or(false),
        italic: rpr.and_then(|rpr| rpr.child("i")).map(is_on).unwrap_or(false),
    };

    TextRun {
        segments: r.children_named("t").map(XmlElement::text).collect(),
        style,
    }
}

/// A toggle property is on unless its `val` explicitly turns it off.
fn is_on(toggle: &XmlElement) -> bool {
    !matches!(toggle.attr("val"), Some("0" | "false" | "off"))
}

fn parse_table(tbl: &XmlElement) -> Table {
    Table {
        rows: tbl.children_named("tr").map(parse_row).collect(),
    }
}

fn parse_row(tr: &XmlElement) -> TableRow {
    TableRow::new(tr.children_named("tc").map(parse_cell).collect())
}

fn parse_cell(tc: &XmlElement) -> TableCell {
    TableCell::with_content(tc.children_named("p").map(parse_paragraph).collect())
}
