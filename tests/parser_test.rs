//! Integration tests for reading DOCX packages end to end.

mod common;

use common::{document_xml, para, table, DocxBuilder};
use docx2md::{
    parse_bytes, parse_bytes_with_options, parse_reader, Block, Docx2Md, DocxParser, Error,
    Metadata, ParseOptions, TableShape,
};

#[test]
fn test_full_pipeline() {
    let body = format!(
        "{}{}{}{}{}",
        para(Some("Heading1"), "Report"),
        para(Some("ChecklistItem"), "  Ship it  "),
        r#"<w:p><w:r><w:t xml:space="preserve">Mixed </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>bold</w:t></w:r><w:r><w:rPr><w:i/></w:rPr><w:t>it</w:t></w:r></w:p>"#,
        table(&[&["Name", "Pipe"], &["x", "a|b"]]),
        "<w:sectPr/>"
    );
    let data = DocxBuilder::with_body(&body)
        .core("<dc:title>Quarterly</dc:title><dc:creator>Jane</dc:creator><dcterms:created xsi:type=\"dcterms:W3CDTF\">2024-01-15T10:30:05Z</dcterms:created>")
        .build();

    let markdown = Docx2Md::new().parse_bytes(&data).unwrap().to_markdown().unwrap();

    assert_eq!(
        markdown,
        "# Report\n\
         - [ ] Ship it\n\
         Mixed **bold***it*\n\n\n\
         | Name | Pipe | \n\
         | --- | --- | \n\
         | x | a\\|b | \n\n\
         \n---\n\n\
         ## Document Metadata\n\
         **Title**: Quarterly\n\
         **Author**: Jane\n\
         **Created**: 2024-01-15 10:30:05\n\n"
    );
}

#[test]
fn test_list_paragraph() {
    let body = r#"<w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="3"/></w:numPr></w:pPr><w:r><w:t>First</w:t></w:r></w:p>"#;
    let data = DocxBuilder::with_body(body).build();

    let markdown = Docx2Md::new()
        .without_metadata()
        .parse_bytes(&data)
        .unwrap()
        .to_markdown()
        .unwrap();
    assert_eq!(markdown, "- First\n");
}

#[test]
fn test_no_core_properties_gives_empty_metadata() {
    let data = DocxBuilder::with_body(&para(None, "Body")).build();

    let doc = parse_bytes(&data).unwrap();
    assert_eq!(doc.metadata, Some(Metadata::default()));

    let markdown = Docx2Md::new().parse_bytes(&data).unwrap().to_markdown().unwrap();
    assert_eq!(markdown, "Body\n\n\n## Document Metadata\n\n");
}

#[test]
fn test_empty_core_properties_keeps_header() {
    let data = DocxBuilder::with_body("").core("").build();

    let markdown = Docx2Md::new().parse_bytes(&data).unwrap().to_markdown().unwrap();
    assert_eq!(markdown, "## Document Metadata\n\n");
}

#[test]
fn test_without_metadata() {
    let data = DocxBuilder::with_body(&para(None, "Body"))
        .core("<dc:creator>Jane</dc:creator>")
        .build();

    let result = Docx2Md::new().without_metadata().parse_bytes(&data).unwrap();
    assert!(result.document().metadata.is_none());
    assert_eq!(result.to_markdown().unwrap(), "Body\n\n\n");
}

#[test]
fn test_main_part_resolved_from_relationships() {
    let rels = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document2.xml"/></Relationships>"#;
    let data = DocxBuilder::new()
        .part("_rels/.rels", rels)
        .part("word/document2.xml", &document_xml(&para(Some("Heading2"), "Moved")))
        .build();

    let parser = DocxParser::from_bytes(&data).unwrap();
    assert_eq!(parser.main_part(), "word/document2.xml");

    let doc = parser.parse().unwrap();
    assert_eq!(doc.plain_text(), "Moved");
}

#[test]
fn test_fallback_main_part_without_relationships() {
    let data = DocxBuilder::new()
        .part("word/document.xml", &document_xml(&para(None, "Plain")))
        .build();

    let doc = parse_bytes(&data).unwrap();
    assert_eq!(doc.block_count(), 1);
}

#[test]
fn test_missing_main_part() {
    let data = DocxBuilder::new().part("docProps/core.xml", "<x/>").build();

    assert!(matches!(
        parse_bytes(&data),
        Err(Error::MissingPart(part)) if part == "word/document.xml"
    ));
}

#[test]
fn test_not_a_zip() {
    assert!(matches!(
        parse_bytes(b"<w:document/>"),
        Err(Error::UnknownFormat)
    ));
}

#[test]
fn test_malformed_main_part() {
    let data = DocxBuilder::new()
        .part("word/document.xml", "<w:document><w:body>")
        .build();

    assert!(parse_bytes(&data).is_err());
}

#[test]
fn test_malformed_core_properties_strict_vs_lenient() {
    let data = DocxBuilder::with_body(&para(None, "Body"))
        .part("docProps/core.xml", "<cp:coreProperties><dc:title>")
        .build();

    assert!(parse_bytes(&data).is_err());

    let doc = parse_bytes_with_options(&data, ParseOptions::new().lenient()).unwrap();
    assert!(doc.metadata.is_none());
    assert_eq!(doc.plain_text(), "Body");
}

#[test]
fn test_read_metadata_disabled_skips_core_part() {
    let data = DocxBuilder::with_body(&para(None, "Body"))
        .part("docProps/core.xml", "not xml at all <")
        .build();

    let doc = parse_bytes_with_options(&data, ParseOptions::new().with_metadata(false)).unwrap();
    assert!(doc.metadata.is_none());
}

#[test]
fn test_part_size_limit() {
    let data = DocxBuilder::with_body(&para(None, &"x".repeat(4096))).build();

    let result = parse_bytes_with_options(&data, ParseOptions::new().with_max_part_size(1024));
    assert!(matches!(result, Err(Error::PartTooLarge { .. })));
}

#[test]
fn test_unknown_body_elements_are_kept_as_other() {
    let body = format!(
        "{}<w:sdt><w:sdtContent/></w:sdt>{}",
        para(None, "a"),
        para(None, "b")
    );
    let data = DocxBuilder::with_body(&body).build();

    let doc = parse_bytes(&data).unwrap();
    assert!(matches!(&doc.body[1], Block::Other { tag } if tag == "w:sdt"));

    let result = Docx2Md::new().without_metadata().parse_bytes(&data).unwrap();
    let rendered = result.to_markdown_with_stats().unwrap();
    assert_eq!(rendered.content, "a\n\n\nb\n\n\n");
    assert_eq!(rendered.stats.skipped_count, 1);
}

#[test]
fn test_irregular_table_from_package() {
    let data = DocxBuilder::with_body(&table(&[&["A", "B"], &["1"]])).build();

    let as_is = Docx2Md::new()
        .without_metadata()
        .parse_bytes(&data)
        .unwrap()
        .to_markdown()
        .unwrap();
    assert_eq!(as_is, "| A | B | \n| --- | --- | \n| 1 | \n\n");

    let padded = Docx2Md::new()
        .without_metadata()
        .with_table_shape(TableShape::Pad)
        .parse_bytes(&data)
        .unwrap()
        .to_markdown()
        .unwrap();
    assert_eq!(padded, "| A | B | \n| --- | --- | \n| 1 |  | \n\n");
}

#[test]
fn test_parse_reader() {
    let data = DocxBuilder::with_body(&para(Some("Heading1"), "From reader")).build();

    let doc = parse_reader(std::io::Cursor::new(data)).unwrap();
    assert_eq!(doc.plain_text(), "From reader");
}

#[test]
fn test_parse_twice_is_independent() {
    let data = DocxBuilder::with_body(&para(None, "Same")).build();
    let parser = DocxParser::from_bytes(&data).unwrap();

    let first = parser.parse().unwrap();
    let second = parser.parse().unwrap();
    assert_eq!(first, second);
}
