//! 构建时生成应用图标 icon.ico 并嵌入 Windows 可执行文件（任务栏/桌面/资源管理器显示）

/// Nord 强调色
const R: u8 = 0x88;
const G: u8 = 0xC0;
const B: u8 = 0xD0;

/// 圆环表盘 + 指向 12 点和 3 点的两根指针
fn make_rgba_clock(size: u32) -> Vec<u8> {
    let c = (size as f32) * 0.5;
    let outer = (size as f32) * 0.46;
    let inner = outer - (size as f32 * 0.1).max(1.5);
    let hand = (size as f32 * 0.05).max(1.0);
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32) + 0.5 - c;
            let dy = (y as f32) + 0.5 - c;
            let d = (dx * dx + dy * dy).sqrt();
            let ring = d <= outer && d >= inner;
            let minute_hand = dx.abs() <= hand && dy <= 0.0 && -dy <= inner * 0.8;
            let hour_hand = dy.abs() <= hand && dx >= 0.0 && dx <= inner * 0.55;
            if ring || minute_hand || hour_hand {
                rgba.extend_from_slice(&[R, G, B, 255]);
            } else {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    rgba
}

fn main() {
    #[cfg(windows)]
    {
        let manifest_dir = std::path::PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
        let icon_path = manifest_dir.join("icon.ico");

        let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
        for &size in &[16u32, 32u32, 48u32, 256u32] {
            let rgba = make_rgba_clock(size);
            let image = ico::IconImage::from_rgba_data(size, size, rgba);
            let entry = ico::IconDirEntry::encode(&image).expect("encode icon entry");
            icon_dir.add_entry(entry);
        }

        let mut file = std::fs::File::create(&icon_path).expect("create icon.ico");
        icon_dir.write(&mut file).expect("write icon.ico");

        let mut res = winres::WindowsResource::new();
        res.set_icon("icon.ico");
        if let Err(e) = res.compile() {
            eprintln!("winres: {} (未安装 Windows SDK/rc.exe 时可忽略，图标不会嵌入 exe)", e);
        }
    }
}
