//! Session Gate — 启动时一次性读取登录态，决定进入任务视图还是跳转登录页
//!
//! token 在启动时读入显式的 [`Session`] 上下文并随客户端传递，
//! 替代按请求读 cookie 的隐式全局状态。运行期间不刷新、不清除。

use crate::storage;

/// 显式 session 上下文（启动时构造一次，只读）
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// `Authorization` 请求头的值
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// 启动门禁的裁决结果
#[derive(Debug)]
pub enum Gate {
    /// 已登录：携带 session 进入任务视图
    Authorized(Session),
    /// 未登录：跳转登录页（唯一出路，不重试）
    RedirectToLogin,
}

/// 启动门禁：读取 session 文件并裁决
pub fn gate() -> Gate {
    match storage::session::load_token() {
        Some(token) => Gate::Authorized(Session::new(token)),
        None => Gate::RedirectToLogin,
    }
}
