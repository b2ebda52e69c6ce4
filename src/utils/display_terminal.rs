//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작과 레지스트리 초기화 과정을 사람이 읽기 쉬운 형태로 출력합니다.

const MIN_BOX_WIDTH: usize = 50;

/// 제목을 감싸는 박스의 세 줄을 만듭니다.
///
/// 박스 폭은 최소 50칸이며 긴 제목에 맞춰 늘어납니다.
pub fn boxed_title_lines(title: &str) -> [String; 3] {
    let title_width = title.chars().count();
    let width = MIN_BOX_WIDTH.max(title_width + 2);
    let border = "═".repeat(width);

    let left = (width - title_width) / 2;
    let right = width - title_width - left;

    [
        format!("╔{}╗", border),
        format!("║{}{}{}║", " ".repeat(left), title, " ".repeat(right)),
        format!("╚{}╝", border),
    ]
}

pub fn print_boxed_title(title: &str) {
    for line in boxed_title_lines(title) {
        println!("{}", line);
    }
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}

/// 서버 바인딩 정보를 출력합니다.
pub fn print_server_banner(bind_address: &str, environment: &str) {
    print_boxed_title("🍱 MEAL MATE SERVER");
    println!("   🌐 Listening: http://{}", bind_address);
    println!("   📍 Health check: http://{}/health", bind_address);
    println!("   🏷️  Environment: {}", environment);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_centers_short_titles() {
        let [top, middle, bottom] = boxed_title_lines("READY");

        assert_eq!(top.chars().count(), MIN_BOX_WIDTH + 2);
        assert_eq!(middle.chars().count(), MIN_BOX_WIDTH + 2);
        assert_eq!(bottom.chars().count(), MIN_BOX_WIDTH + 2);
        assert!(middle.contains(" READY "));
    }

    #[test]
    fn test_boxed_title_grows_for_long_titles() {
        let title = "X".repeat(70);
        let [top, middle, _] = boxed_title_lines(&title);

        assert_eq!(top.chars().count(), 74);
        assert_eq!(middle.chars().count(), 74);
    }
}
