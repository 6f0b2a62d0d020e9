use crate::error::{AiolosError, Result};
use crate::formats;
use crate::settings::{load_settings, save_settings, settings_path, shellexpand_path};

pub fn run(
    data_dir: Option<String>,
    company: Option<String>,
    default_format: Option<String>,
) -> Result<()> {
    let mut settings = load_settings();

    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    if let Some(name) = company {
        settings.company_name = name.trim().to_string();
    }
    if let Some(key) = default_format {
        let spec = formats::get_by_key(&key).ok_or_else(|| AiolosError::UnknownFormat(key.clone()))?;
        settings.default_format = Some(spec.key.to_string());
    }

    save_settings(&settings)?;

    std::fs::create_dir_all(settings.data_path())?;
    std::fs::create_dir_all(settings.exports_dir())?;
    std::fs::create_dir_all(settings.documents_dir())?;

    println!("Initialized aiolos at {}", settings.data_path().display());
    println!("Settings:  {}", settings_path().display());
    Ok(())
}
