//! Static assets: portrait decoding and resume export.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use eframe::egui;

/// Decode the portrait into an egui image ready for upload.
pub fn load_portrait(path: &Path) -> Result<egui::ColorImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Ask the user where to save the resume, suggesting the source file name.
pub fn pick_resume_destination(resume: &Path) -> Option<PathBuf> {
    let file_name = resume
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "resume.pdf".to_string());
    rfd::FileDialog::new().set_file_name(file_name).save_file()
}

/// Copy the resume to `dest`. Returns the number of bytes written.
pub fn export_resume(resume: &Path, dest: &Path) -> Result<u64> {
    if !resume.is_file() {
        return Err(anyhow!("resume not found at {}", resume.display()));
    }
    fs::copy(resume, dest)
        .with_context(|| format!("failed to write {}", dest.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_decodes_to_color_image() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("portrait.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255])).save(&path)?;

        let portrait = load_portrait(&path)?;
        assert_eq!(portrait.size, [3, 2]);
        assert_eq!(portrait.pixels[0], egui::Color32::from_rgb(10, 20, 30));
        Ok(())
    }

    #[test]
    fn missing_portrait_is_an_error() {
        assert!(load_portrait(Path::new("does/not/exist.png")).is_err());
    }

    #[test]
    fn resume_is_copied() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("resume.pdf");
        fs::write(&src, b"%PDF-1.4 resume")?;
        let dest = dir.path().join("saved.pdf");

        let written = export_resume(&src, &dest)?;
        assert_eq!(written, 15);
        assert_eq!(fs::read(&dest)?, b"%PDF-1.4 resume");
        Ok(())
    }

    #[test]
    fn missing_resume_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_resume(&dir.path().join("nope.pdf"), &dir.path().join("out.pdf"))
            .unwrap_err();
        assert!(err.to_string().contains("resume not found"));
    }
}
