//! 対話式ページ送り
//!
//! ブラウザ版と同じページ状態（PageController）とアノテーション状態（AnnotationCache）を使い、
//! 端末上で前後のページ移動・ページ指定・詳細表示を行う。

use crate::client::SearchClient;
use crate::error::{BrowserError, Result};
use crate::render;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;
use tracing::info;
use variant_browser_common::{
    AnnotationCache, AnnotationState, FilterCriteria, PageController, PageResult,
};

/// メニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Next(u32),
    Previous(u32),
    Jump,
    Details,
    Quit,
}

impl MenuAction {
    pub fn label(&self) -> String {
        match self {
            MenuAction::Next(page) => format!("Next (page {})", page),
            MenuAction::Previous(page) => format!("Previous (page {})", page),
            MenuAction::Jump => "Go to page...".to_string(),
            MenuAction::Details => "Show variant details".to_string(),
            MenuAction::Quit => "Quit".to_string(),
        }
    }
}

/// 現在の状態で選べる操作（前後ボタンは範囲内のときだけ出す）
pub fn menu_actions(controller: &PageController, has_rows: bool) -> Vec<MenuAction> {
    let mut actions = Vec::new();
    if let Some(page) = controller.next_page() {
        actions.push(MenuAction::Next(page));
    }
    if let Some(page) = controller.prev_page() {
        actions.push(MenuAction::Previous(page));
    }
    if controller.total_pages() > 1 {
        actions.push(MenuAction::Jump);
    }
    if has_rows {
        actions.push(MenuAction::Details);
    }
    actions.push(MenuAction::Quit);
    actions
}

/// ページ番号の範囲チェック
pub fn validate_page(page: u32, total: u32) -> Result<u32> {
    if page == 0 || page > total {
        return Err(BrowserError::PageOutOfRange { page, total });
    }
    Ok(page)
}

/// スピナーを表示しながら非同期処理を待つ
pub async fn with_spinner<T, F>(message: &str, future: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    let output = future.await;
    spinner.finish_and_clear();
    output
}

struct BrowseSession<'a> {
    client: &'a SearchClient,
    criteria: FilterCriteria,
    controller: PageController,
    annotations: AnnotationCache,
    current: Option<PageResult>,
}

impl<'a> BrowseSession<'a> {
    /// ページを取得して表示を差し替える（失敗時は前の表示を維持）
    async fn load(&mut self, page: u32) {
        let ticket = self.controller.begin(page);
        let message = format!("Loading page {}...", ticket.page);
        match with_spinner(&message, self.client.fetch_page(&self.criteria, ticket.page)).await {
            Ok(result) => {
                if self.controller.accept(ticket, &result) {
                    self.annotations.clear();
                    self.current = Some(result);
                }
            }
            Err(e) => eprintln!("{}", e.alert_message()),
        }
    }

    async fn show_details(&mut self) -> Result<()> {
        let Some(current) = &self.current else {
            return Ok(());
        };
        let labels: Vec<String> = current
            .items
            .iter()
            .enumerate()
            .map(|(i, row)| format!("{:>3}  {}  {}", i + 1, row.locus_repr, row.allele_repr))
            .collect();
        let index = Select::new()
            .with_prompt("Variant")
            .items(&labels)
            .default(0)
            .interact()?;
        let row = current.items[index].clone();

        println!("\n{}", render::render_detail(&row));

        if let Some(dbsnp_id) = self.annotations.begin(row.id, row.dbsnp.as_deref()) {
            let message = format!("Fetching {} from Ensembl...", dbsnp_id);
            let result = with_spinner(&message, self.client.fetch_annotation(&dbsnp_id))
                .await
                .map_err(|e| e.to_string());
            self.annotations.finish(row.id, result);
        }

        match self.annotations.state(row.id) {
            AnnotationState::Loaded(info) => println!("{}", render::render_annotation(&info)),
            AnnotationState::Failed(message) => {
                info!(row = row.id, %message, "annotation fetch failed");
                println!("  Failed to fetch variant data");
            }
            AnnotationState::NotRequested | AnnotationState::Loading => {}
        }
        println!();
        Ok(())
    }
}

/// 対話式の閲覧を開始
pub async fn run_browse(client: &SearchClient, criteria: FilterCriteria) -> Result<()> {
    let mut session = BrowseSession {
        client,
        criteria,
        controller: PageController::new(),
        annotations: AnnotationCache::new(),
        current: None,
    };

    session.load(1).await;

    loop {
        if let Some(current) = &session.current {
            println!("\n{}", render::render_page(current));
        }

        let has_rows = session.current.as_ref().is_some_and(|p| !p.items.is_empty());
        let actions = menu_actions(&session.controller, has_rows);
        let labels: Vec<String> = actions.iter().map(|a| a.label()).collect();
        let selection = Select::new()
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selection] {
            MenuAction::Next(page) | MenuAction::Previous(page) => session.load(page).await,
            MenuAction::Jump => {
                let total = session.controller.total_pages();
                let page: u32 = Input::new()
                    .with_prompt(format!("Page (1-{})", total))
                    .validate_with(|input: &u32| -> std::result::Result<(), String> {
                        validate_page(*input, total).map(|_| ()).map_err(|e| e.to_string())
                    })
                    .interact_text()?;
                session.load(page).await;
            }
            MenuAction::Details => session.show_details().await?,
            MenuAction::Quit => break,
        }
    }

    Ok(())
}
