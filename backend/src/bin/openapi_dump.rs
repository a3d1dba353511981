//! Print the OpenAPI document as JSON on stdout.

use hello_kit::ApiDoc;
use utoipa::OpenApi;

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
