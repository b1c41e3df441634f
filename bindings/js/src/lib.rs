use chartspec::{dialect_from_name, Compiler, IdentifierResolution, Options};
use wasm_bindgen::prelude::*;

fn compiler(dialect: &str, flexible_identifiers: bool) -> Result<Compiler, String> {
    Ok(Compiler::new(Options {
        dialect: dialect_from_name(dialect)?,
        identifier_resolution: if flexible_identifiers {
            IdentifierResolution::Flexible
        } else {
            IdentifierResolution::Strict
        },
    }))
}

/// Compile a JSON chart spec to SQL with escaped inline literals.
#[wasm_bindgen(js_name = generateSql)]
pub fn generate_sql(spec_json: &str, table_name: &str, dialect: &str) -> Result<String, String> {
    Ok(compiler(dialect, false)?.generate_sql_json(spec_json, table_name)?)
}

/// Lay out a JSON array of result rows, returning the render configuration as JSON.
#[wasm_bindgen(js_name = renderConfig)]
pub fn render_config(
    spec_json: &str,
    rows_json: &str,
    flexible_identifiers: bool,
) -> Result<String, String> {
    Ok(compiler("mysql", flexible_identifiers)?.render_config_json(spec_json, rows_json)?)
}
