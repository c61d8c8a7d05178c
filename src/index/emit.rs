//! Module text emission.
//!
//! Renders an asset index as a static ES module whose top-level keys are
//! folder names mapping to inner `basename: require('./<folder>/<file>')`
//! pairs. The byte format is fixed: tab indentation, a trailing comma after
//! every entry and folder block, and a final newline.

use crate::index::model::AssetIndex;

/// Render the index as the generated module text.
pub fn render_module(index: &AssetIndex) -> String {
    let mut out = String::from("export default {\n");
    for folder in &index.folders {
        out.push('\t');
        out.push_str(&folder.name);
        out.push_str(": {\n");
        for file in &folder.files {
            out.push_str(&format!(
                "\t\t{}: require('./{}/{}'),\n",
                file.key, folder.name, file.file_name
            ));
        }
        out.push_str("\t},\n");
    }
    out.push_str("};\n");
    out
}
