use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Stream};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wraps compiled operations in a minimal one-page document.
pub fn document_with_operations(
    operations: Vec<Operation>,
) -> Result<Document, Box<dyn std::error::Error>> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1_i64,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

/// Decodes the first page's content stream back into operations.
pub fn page_operations(doc: &Document) -> Result<Vec<Operation>, Box<dyn std::error::Error>> {
    let pages = doc.get_pages();
    let page_id = *pages.get(&1).ok_or("document has no pages")?;
    let bytes = doc.get_page_content(page_id)?;
    let content = Content::decode(&bytes)?;
    Ok(content.operations)
}

pub fn operator_names(operations: &[Operation]) -> Vec<&str> {
    operations.iter().map(|op| op.operator.as_str()).collect()
}

/// Asserts the sequence opens with a save, closes with the matching
/// restore, and never restores past its own opening save in between.
pub fn assert_balanced_graphics_state(operations: &[Operation]) {
    assert_eq!(
        operations.first().map(|op| op.operator.as_str()),
        Some("q"),
        "sequence must open with a state save"
    );
    assert_eq!(
        operations.last().map(|op| op.operator.as_str()),
        Some("Q"),
        "sequence must close with a state restore"
    );
    let mut depth = 0_i32;
    for (index, op) in operations.iter().enumerate() {
        match op.operator.as_str() {
            "q" => depth += 1,
            "Q" => {
                depth -= 1;
                assert!(
                    depth > 0 || index == operations.len() - 1,
                    "state restored past the opening save at index {index}"
                );
            }
            _ => {}
        }
    }
    assert_eq!(depth, 0, "save/restore pairs are unbalanced");
}
