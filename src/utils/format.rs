//! 时间格式化工具

/// 把秒数格式化为 hh:mm:ss（倒计时显示用）
pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// 把秒数格式化为时长（如 "1h 5m" / "42m"）
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// 把下标转换为显示字母（0 -> A, 1 -> B, ...）
pub fn position_letter(index: usize) -> char {
    (b'A' + (index as u8 % 26)) as char
}
