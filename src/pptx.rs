// ABOUTME: PPTX generation module for the weekly-deck application
// ABOUTME: Writes a deck of text slides out as an OOXML presentation package

use crate::deck::{Align, Deck, Paragraph, Slide, TextBox};
use crate::errors::{DeckError, Result};
use crate::utils::ensure_parent_directory_exists;
use log::info;
use quick_xml::escape::escape;
use std::fs;
use std::io::Write;
use std::path::Path;
use zip::{write::FileOptions, ZipWriter};

/// Slide canvas: 10 x 7.5 inches, in EMU.
const SLIDE_CX: i64 = 9_144_000;
const SLIDE_CY: i64 = 6_858_000;

/// Write a deck to `output_file` as a PPTX package.
pub fn write_pptx(deck: &Deck, output_file: &Path) -> Result<()> {
    info!(
        "Writing PPTX with {} slides to {:?}",
        deck.slides.len(),
        output_file
    );

    ensure_parent_directory_exists(output_file)?;

    let file = fs::File::create(output_file).map_err(DeckError::FileReadError)?;
    let mut zip = ZipWriter::new(file);

    // Add [Content_Types].xml
    info!("Creating PPTX structure: [Content_Types].xml");
    zip.start_file("[Content_Types].xml", FileOptions::default())?;
    let content_types = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
    {slides}
</Types>"#,
        slides = (1..=deck.slides.len()).map(|i| {
            format!(r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#, i)
        }).collect::<Vec<String>>().join("\n")
    );
    zip.write_all(content_types.as_bytes())?;

    // Add _rels/.rels
    info!("Creating PPTX structure: _rels/.rels");
    zip.start_file("_rels/.rels", FileOptions::default())?;
    let rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;
    zip.write_all(rels.as_bytes())?;

    // Add docProps/app.xml
    info!("Creating PPTX structure: docProps/app.xml");
    zip.start_file("docProps/app.xml", FileOptions::default())?;
    let app_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>weekly-deck</Application>
    <Slides>{}</Slides>
</Properties>"#,
        deck.slides.len()
    );
    zip.write_all(app_xml.as_bytes())?;

    // Add docProps/core.xml
    info!("Creating PPTX structure: docProps/core.xml");
    zip.start_file("docProps/core.xml", FileOptions::default())?;
    let core_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>weekly-deck</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
        escape(&deck.title),
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    );
    zip.write_all(core_xml.as_bytes())?;

    // Add ppt/_rels/presentation.xml.rels
    info!("Creating PPTX structure: ppt/_rels/presentation.xml.rels");
    zip.start_file("ppt/_rels/presentation.xml.rels", FileOptions::default())?;

    let mut pres_rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
    );

    // Add relationship for each slide
    for i in 1..=deck.slides.len() {
        pres_rels.push_str(&format!(
            r#"    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            i, i
        ));
        pres_rels.push('\n');
    }

    pres_rels.push_str("</Relationships>");
    zip.write_all(pres_rels.as_bytes())?;

    // Add ppt/presentation.xml
    info!("Creating PPTX structure: ppt/presentation.xml");
    zip.start_file("ppt/presentation.xml", FileOptions::default())?;
    let presentation_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}" type="screen4x3"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
        slide_ids = (1..=deck.slides.len())
            .map(|i| { format!(r#"        <p:sldId id="{}" r:id="rId{}"/>"#, 255 + i, i) })
            .collect::<Vec<String>>()
            .join("\n"),
        cx = SLIDE_CX,
        cy = SLIDE_CY
    );
    zip.write_all(presentation_xml.as_bytes())?;

    // Write each slide
    for (i, slide) in deck.slides.iter().enumerate() {
        let slide_num = i + 1;
        info!("Creating slide XML: ppt/slides/slide{}.xml", slide_num);
        zip.start_file(
            format!("ppt/slides/slide{}.xml", slide_num),
            FileOptions::default(),
        )?;
        zip.write_all(slide_xml(slide).as_bytes())?;
    }

    // Finalize the ZIP file
    info!("Finalizing PPTX file");
    zip.finish()?;

    info!("PPTX file created at {:?}", output_file);
    Ok(())
}

/// Serialize one slide: a blank canvas holding the slide's text boxes.
fn slide_xml(slide: &Slide) -> String {
    let shapes = slide
        .boxes
        .iter()
        .enumerate()
        // Shape ids start at 2; id 1 is the group shape.
        .map(|(i, b)| textbox_xml(b, i as u64 + 2))
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:cSld>
        <p:spTree>
            <p:nvGrpSpPr>
                <p:cNvPr id="1" name=""/>
                <p:cNvGrpSpPr/>
                <p:nvPr/>
            </p:nvGrpSpPr>
            <p:grpSpPr>
                <a:xfrm>
                    <a:off x="0" y="0"/>
                    <a:ext cx="0" cy="0"/>
                    <a:chOff x="0" y="0"/>
                    <a:chExt cx="0" cy="0"/>
                </a:xfrm>
            </p:grpSpPr>
{shapes}
        </p:spTree>
    </p:cSld>
    <p:clrMapOvr>
        <a:masterClrMapping/>
    </p:clrMapOvr>
</p:sld>"#
    )
}

fn textbox_xml(textbox: &TextBox, id: u64) -> String {
    let wrap = if textbox.word_wrap { "square" } else { "none" };
    let paragraphs = textbox
        .paragraphs
        .iter()
        .map(paragraph_xml)
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        r#"            <p:sp>
                <p:nvSpPr>
                    <p:cNvPr id="{id}" name="TextBox {id}"/>
                    <p:cNvSpPr txBox="1"/>
                    <p:nvPr/>
                </p:nvSpPr>
                <p:spPr>
                    <a:xfrm>
                        <a:off x="{x}" y="{y}"/>
                        <a:ext cx="{cx}" cy="{cy}"/>
                    </a:xfrm>
                    <a:prstGeom prst="rect">
                        <a:avLst/>
                    </a:prstGeom>
                    <a:noFill/>
                </p:spPr>
                <p:txBody>
                    <a:bodyPr wrap="{wrap}" rtlCol="0"/>
                    <a:lstStyle/>
{paragraphs}
                </p:txBody>
            </p:sp>"#,
        id = id,
        x = textbox.x,
        y = textbox.y,
        cx = textbox.width,
        cy = textbox.height,
        wrap = wrap,
        paragraphs = paragraphs
    )
}

fn paragraph_xml(para: &Paragraph) -> String {
    if para.is_spacer() {
        return r#"                    <a:p>
                        <a:endParaRPr lang="en-US"/>
                    </a:p>"#
            .to_string();
    }

    let mut props = Vec::new();
    if para.level > 0 {
        props.push(format!(r#"lvl="{}""#, para.level));
    }
    if para.align == Align::Center {
        props.push(r#"algn="ctr""#.to_string());
    }
    let attrs = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(" "))
    };

    let spacing = if para.space_after > 0 {
        format!(
            "\n                            <a:spcAft><a:spcPts val=\"{}\"/></a:spcAft>",
            para.space_after
        )
    } else {
        String::new()
    };

    let bold = if para.bold { r#" b="1""# } else { "" };

    format!(
        r#"                    <a:p>
                        <a:pPr{attrs}>{spacing}
                        </a:pPr>
                        <a:r>
                            <a:rPr lang="en-US" sz="{size}"{bold} dirty="0">
                                <a:solidFill><a:srgbClr val="000000"/></a:solidFill>
                                <a:latin typeface="{font}"/>
                                <a:ea typeface="{font}"/>
                            </a:rPr>
                            <a:t>{text}</a:t>
                        </a:r>
                    </a:p>"#,
        attrs = attrs,
        spacing = spacing,
        size = para.size,
        bold = bold,
        font = escape(&para.font),
        text = escape(&para.text)
    )
}
