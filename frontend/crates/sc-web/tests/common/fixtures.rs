#![allow(dead_code)]

use sc_client::ApiClient;
use sc_web::{BannerKind, BannerSlot, LocalFile, MemoryPage};

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use wiremock::MockServer;

pub fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new(&format!("{}/api", server.uri()))
}

/// Client pointed at a port nothing listens on
pub fn unreachable_client() -> ApiClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    ApiClient::new(&format!("http://127.0.0.1:{port}/api"))
}

pub fn png_file(width: u32, height: u32) -> LocalFile {
    let image = RgbImage::from_pixel(width, height, Rgb([20, 120, 220]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    LocalFile::new("upload.png", "image/png", bytes)
}

/// Texts of the banners currently shown in `slot`
pub fn banner_texts(page: &MemoryPage, slot: BannerSlot) -> Vec<(BannerKind, String)> {
    page.banners()
        .into_iter()
        .filter(|banner| banner.slot == slot)
        .map(|banner| (banner.kind, banner.text))
        .collect()
}
