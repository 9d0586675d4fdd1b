use std::path::Path;

use crate::ui;

/// 首次运行：默认配置已写入，提示用户编辑
pub fn report_created(path: &Path, colored: bool) {
    ui::success(
        &rust_i18n::t!("config.created", path = path.display()),
        colored,
    );
    println!();
    println!(
        "{}",
        ui::info(&rust_i18n::t!("config.edit_hint"), colored)
    );
}
