//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量访问。命令行参数优先于环境变量，
//! 环境变量优先于内置默认值。

use std::env;
use std::fmt;

use crate::assets::relocator::is_valid_scripts_dir;
use crate::naming::classifier::RenameMode;
use crate::naming::generator::is_valid_prefix;
use crate::network::session::DEFAULT_TIMEOUT;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "CLASSMINT_LOG_LEVEL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("warn".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn parse(value: &str) -> EnvResult<String> {
            match value.trim().to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.trim().to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }

    /// 禁用颜色输出
    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> EnvResult<bool> {
            // NO_COLOR 遵循标准：任何值都表示禁用颜色
            Ok(!value.is_empty())
        }
    }
}

/// 命名相关环境变量
pub mod naming {
    use super::*;

    fn parse_prefix(value: &str, var_name: &str) -> EnvResult<String> {
        let prefix = value.trim();
        if is_valid_prefix(prefix) {
            Ok(prefix.to_string())
        } else {
            Err(EnvError {
                variable: var_name.to_string(),
                message: format!(
                    "Invalid prefix '{}'. Must start with a letter or '_' and contain only letters, digits, '_' and '-'",
                    value
                ),
            })
        }
    }

    /// 类名前缀
    pub struct ClassPrefix;
    impl EnvVar<String> for ClassPrefix {
        const NAME: &'static str = "CLASSMINT_CLASS_PREFIX";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("c".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Prefix of generated class names";

        fn parse(value: &str) -> EnvResult<String> {
            parse_prefix(value, Self::NAME)
        }
    }

    /// ID 前缀
    pub struct IdPrefix;
    impl EnvVar<String> for IdPrefix {
        const NAME: &'static str = "CLASSMINT_ID_PREFIX";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("i".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Prefix of generated IDs";

        fn parse(value: &str) -> EnvResult<String> {
            parse_prefix(value, Self::NAME)
        }
    }

    /// 重命名模式
    pub struct Mode;
    impl EnvVar<RenameMode> for Mode {
        const NAME: &'static str = "CLASSMINT_MODE";
        const DEFAULT: Option<RenameMode> = Some(RenameMode::Default);
        const DESCRIPTION: &'static str =
            "Rename mode: strict (GUID-shaped tokens only), default (any opaque token)";

        fn parse(value: &str) -> EnvResult<RenameMode> {
            value.parse().map_err(|message| EnvError {
                variable: Self::NAME.to_string(),
                message,
            })
        }
    }
}

/// 脚本迁移相关环境变量
pub mod scripts {
    use super::*;

    /// 脚本目录
    pub struct Dir;
    impl EnvVar<String> for Dir {
        const NAME: &'static str = "CLASSMINT_SCRIPTS_DIR";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("js".to_string()),
            }
        }
        const DESCRIPTION: &'static str =
            "Directory under the output directory that receives relocated scripts";

        fn parse(value: &str) -> EnvResult<String> {
            let dir = value.trim();
            if is_valid_scripts_dir(dir) {
                Ok(dir.to_string())
            } else {
                Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Invalid scripts directory '{}'. Must be a relative path", value),
                })
            }
        }
    }

    /// 请求超时
    pub struct Timeout;
    impl EnvVar<u64> for Timeout {
        const NAME: &'static str = "CLASSMINT_TIMEOUT";
        const DEFAULT: Option<u64> = Some(DEFAULT_TIMEOUT);
        const DESCRIPTION: &'static str = "Script download timeout in seconds (0 disables it)";

        fn parse(value: &str) -> EnvResult<u64> {
            parse_u64(value, Self::NAME, 0, 3600)
        }
    }

    /// User-Agent
    pub struct UserAgent;
    impl EnvVar<String> for UserAgent {
        const NAME: &'static str = "CLASSMINT_USER_AGENT";
        const DEFAULT: Option<String> = None; // 未设置时使用内置 User-Agent
        const DESCRIPTION: &'static str = "User-Agent sent when downloading scripts";

        fn parse(value: &str) -> EnvResult<String> {
            let agent = value.trim();
            if agent.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "User-Agent cannot be empty".to_string(),
                });
            }
            Ok(agent.to_string())
        }
    }
}

/// 辅助函数
fn parse_u64(value: &str, var_name: &str, min: u64, max: u64) -> EnvResult<u64> {
    let num: u64 = value.trim().parse().map_err(|_| EnvError {
        variable: var_name.to_string(),
        message: "Must be a valid non-negative number".to_string(),
    })?;

    if num < min {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} is below minimum {}", num, min),
        });
    }

    if num > max {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} exceeds maximum {}", num, max),
        });
    }

    Ok(num)
}

/// 环境变量配置汇总
#[derive(Debug, Clone)]
pub struct EnvConfig {
    // 核心配置
    pub log_level: String,
    pub no_color: bool,

    // 命名配置
    pub class_prefix: String,
    pub id_prefix: String,
    pub mode: RenameMode,

    // 脚本配置
    pub scripts_dir: String,
    pub timeout: u64,
    pub user_agent: Option<String>,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            log_level: core::LogLevel::get()?,
            no_color: core::NoColor::get()?,

            class_prefix: naming::ClassPrefix::get()?,
            id_prefix: naming::IdPrefix::get()?,
            mode: naming::Mode::get()?,

            scripts_dir: scripts::Dir::get()?,
            timeout: scripts::Timeout::get()?,
            user_agent: scripts::UserAgent::get().ok(),
        })
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        eprintln!("Environment Configuration Summary:");
        eprintln!("  Log Level: {}", self.log_level);
        eprintln!("  Class Prefix: {}", self.class_prefix);
        eprintln!("  ID Prefix: {}", self.id_prefix);
        eprintln!("  Mode: {}", self.mode);
        eprintln!("  Scripts Directory: {}", self.scripts_dir);
        eprintln!("  Timeout: {}s", self.timeout);
        if let Some(user_agent) = &self.user_agent {
            eprintln!("  User-Agent: {}", user_agent);
        }
    }
}

fn describe<T: fmt::Debug>(docs: &mut String, name: &str, description: &str, default: Option<T>) {
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        name, description, default
    ));
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables Documentation\n\n");

    docs.push_str("## Core Configuration\n\n");
    describe(&mut docs, core::LogLevel::NAME, core::LogLevel::DESCRIPTION, Some("warn"));
    describe(&mut docs, core::NoColor::NAME, core::NoColor::DESCRIPTION, core::NoColor::DEFAULT);

    docs.push_str("\n## Naming Configuration\n\n");
    describe(
        &mut docs,
        naming::ClassPrefix::NAME,
        naming::ClassPrefix::DESCRIPTION,
        Some("c"),
    );
    describe(&mut docs, naming::IdPrefix::NAME, naming::IdPrefix::DESCRIPTION, Some("i"));
    describe(&mut docs, naming::Mode::NAME, naming::Mode::DESCRIPTION, naming::Mode::DEFAULT);

    docs.push_str("\n## Script Relocation Configuration\n\n");
    describe(&mut docs, scripts::Dir::NAME, scripts::Dir::DESCRIPTION, Some("js"));
    describe(
        &mut docs,
        scripts::Timeout::NAME,
        scripts::Timeout::DESCRIPTION,
        scripts::Timeout::DEFAULT,
    );
    describe(
        &mut docs,
        scripts::UserAgent::NAME,
        scripts::UserAgent::DESCRIPTION,
        scripts::UserAgent::DEFAULT,
    );

    docs
}
