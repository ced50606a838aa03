mod app;
mod cli;
mod client;
mod dialogs;
mod error;
mod event;
mod model;
mod session;
mod storage;
mod theme;
mod ui;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::Cli;
use client::TaskClient;
use session::{Gate, Session};
use theme::{get_theme_colors, Theme};

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    // 加载配置；--server 覆盖配置里的 API origin
    let config = storage::config::load_config();
    let base_url = cli
        .server
        .unwrap_or(config.server.url)
        .trim_end_matches('/')
        .to_string();

    // Session Gate：无 token 时跳转登录页（唯一一次），不再初始化
    let session = match session::gate() {
        Gate::Authorized(session) => session,
        Gate::RedirectToLogin => {
            eprintln!("No session token found — opening the login page.");
            eprintln!(
                "Log in at {} and store the jwt-token in ~/.taskdeck/session.toml.",
                base_url
            );
            if let Err(e) = open::that(&base_url) {
                eprintln!("Failed to open the browser: {}", e);
            }
            std::process::exit(1);
        }
    };

    let theme = Theme::from_name(&config.theme.name);
    run_tui(&base_url, session, theme)
}

/// 启动 TUI 界面
fn run_tui(base_url: &str, session: Session, theme: Theme) -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();

    let client = TaskClient::new(base_url, &session);
    let mut app = App::new(client, get_theme_colors(theme));

    // 已授权：进入即拉取一次任务列表
    app.start_fetch();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 检查后台请求结果
        app.poll_api_events();

        // 渲染界面
        terminal.draw(|frame| ui::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
