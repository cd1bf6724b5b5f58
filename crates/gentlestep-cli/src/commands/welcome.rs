use super::open_router;
use crate::render;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let router = open_router()?;
    print!("{}", render::welcome_screen(router.completions()?));
    Ok(())
}
