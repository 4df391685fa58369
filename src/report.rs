use std::fmt::Write;

use lodestone_catalog::{Catalog, Material};
use lodestone_host::MemoryHost;

/// One line per material: name, identifiers and pool markers.
pub fn material_line(catalog: &Catalog, material: &Material) -> String {
    let mut line = format!("{:<32}", material.name());
    if let Some(block) = material.block_id() {
        let _ = write!(line, " block={block}");
    }
    if let Some(item) = material.item_id() {
        let _ = write!(line, " item={item}");
    }
    if catalog.is_priority(material) {
        line.push_str(" [priority]");
    }
    if material.is_deprecated() {
        line.push_str(" [deprecated]");
    }
    line
}

pub fn describe(catalog: &Catalog, material: &Material, host: &MemoryHost) -> String {
    let mut out = material_line(catalog, material);
    out.push('\n');
    if let Ok(props) = material.block_property_names() {
        let props = if props.is_empty() {
            "-".to_string()
        } else {
            props.join(", ")
        };
        let _ = writeln!(out, "  properties: {props}");
    }
    match material.item_max_stack_size(host) {
        Ok(size) => {
            let _ = writeln!(out, "  max stack: {size}");
        }
        // Block-only materials have no stack size
        Err(e) if material.is_item() => {
            log::warn!("{e}");
        }
        Err(_) => {}
    }
    let tags: Vec<&str> = catalog.tags_of(material).iter().map(|t| t.key()).collect();
    let tags = if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(", ")
    };
    let _ = writeln!(out, "  tags: {tags}");
    out
}

pub fn tag_table(catalog: &Catalog) -> String {
    let mut out = String::new();
    for tag in catalog.tags() {
        let count = catalog.materials_with_tag(tag).count();
        let _ = writeln!(out, "{:<36} {:<40} {count}", tag.key(), tag.display_name());
    }
    out
}
