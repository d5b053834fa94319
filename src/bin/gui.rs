// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{ IconData, ViewportBuilder };
use pickem_paste::{
    config::{ options::AppOptions, settings::Settings, state::AppState },
    gui, log, loge,
};

/// 32x32 football-field green with a white center stripe.
fn app_icon() -> IconData {
    const SIZE: u32 = 32;
    let rgba = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let stripe = (SIZE / 2 - 1..=SIZE / 2).contains(&x) || y % 8 == 0;
        if stripe { image::Rgba([0xF0, 0xF0, 0xF0, 0xFF]) } else { image::Rgba([0x2E, 0x7D, 0x32, 0xFF]) }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    if let Err(e) = log::init_file() {
        eprintln!("Logging disabled: {}", e);
    }

    let mut opts = AppOptions::default();
    match Settings::load_default() {
        Ok(Some(settings)) => settings.apply(&mut opts),
        Ok(None) => {}
        Err(e) => {
            loge!("Settings: {}", e);
            eprintln!("Ignoring settings: {}", e);
        }
    }

    let state = AppState::new(opts);
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
