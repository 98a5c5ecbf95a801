mod api;
mod app;
mod cli;
mod error;
mod event;
mod model;
mod operations;
mod storage;
mod theme;
mod ui;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::{App, AppMode};
use cli::{Cli, Commands};

/// 启动 TUI 界面
fn run_tui() -> io::Result<()> {
    // 创建应用（先于终端初始化，加载告警仍可打到 stderr）
    let mut app = App::new();

    // 初始化终端
    let mut terminal = ratatui::init();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state
        ratatui::restore();
        // Call the original panic hook
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    // 统一调度（无子命令默认 TUI）
    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            run_tui()?;
        }
        Commands::List => {
            cli::list::execute();
        }
        Commands::Add { text } => {
            cli::add::execute(&text);
        }
        Commands::Reset => {
            cli::reset::execute();
        }
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 检查后台操作结果（远端拉取 / 同步响应）
        app.poll_bg_result();

        // 渲染界面
        terminal.draw(|frame| match app.mode {
            AppMode::Home => ui::home::render(frame, app),
            AppMode::Details => ui::details::render(frame, app),
        })?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
