use clap::Parser;
use dept_lookup::adapters::{file::FileDirectorySource, http::HttpDirectorySource};
use dept_lookup::config::toml_config::TomlConfig;
use dept_lookup::core::directory::DepartmentDirectory;
use dept_lookup::domain::locale::Locale;
use dept_lookup::domain::model::Department;
use dept_lookup::domain::ports::{ConfigProvider, DirectorySource};
use dept_lookup::utils::{logger, validation::Validate};
use dept_lookup::CliConfig;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting dept-lookup CLI");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 載入 TOML 配置（如有指定），否則直接使用命令列參數
    match args.config.clone() {
        Some(path) => {
            let mut config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(2);
                }
            };

            // 應用命令列覆蓋設定
            if let Some(locale) = &args.locale {
                config.output.get_or_insert_with(Default::default).locale = Some(locale.clone());
                tracing::info!("🔧 Locale overridden to: {}", locale);
            }
            if args.trace_scan {
                config.diagnostics.get_or_insert_with(Default::default).trace_scan = Some(true);
            }

            run(config, &args).await
        }
        None => run(args.clone(), &args).await,
    }
}

async fn run<C>(config: C, args: &CliConfig) -> Result<(), Box<dyn std::error::Error>>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ Invalid configuration: {}", e);
        std::process::exit(2);
    }

    // 建立資料來源：本地匯出目錄或 CMS HTTP 端點
    match config.source_dir() {
        Some(dir) => {
            tracing::info!("📁 Reading JSON exports from: {}", dir);
            let source = FileDirectorySource::new(dir).with_list_property(config.list_property());
            execute(source, &config, args).await
        }
        None => {
            tracing::info!("📡 Querying CMS at: {}", config.endpoint());
            let source = match HttpDirectorySource::from_config(&config) {
                Ok(source) => source,
                Err(e) => {
                    eprintln!("❌ Failed to build HTTP client: {}", e);
                    std::process::exit(2);
                }
            };
            execute(source, &config, args).await
        }
    }
}

async fn execute<S, C>(
    source: S,
    config: &C,
    args: &CliConfig,
) -> Result<(), Box<dyn std::error::Error>>
where
    S: DirectorySource,
    C: ConfigProvider,
{
    let directory = DepartmentDirectory::new(source).with_scan_trace(config.trace_scan());
    let locale = config.locale().map(Locale::parse);
    let location = config.location();

    match &args.key {
        Some(key) => match directory.find_by_key(location, key).await {
            Ok(Some(department)) => {
                tracing::info!("✅ Found department '{}'", department.key);
                if args.json {
                    let value = department_json(&department, locale.as_ref());
                    println!("{}", serde_json::to_string_pretty(&value)?);
                } else {
                    print_department(&department, locale.as_ref());
                }
            }
            Ok(None) => {
                tracing::warn!("No department found with key '{}'", key);
                eprintln!("❌ No department found with key '{}'", key);
                std::process::exit(1);
            }
            Err(e) => {
                tracing::error!("❌ Lookup failed: {}", e);
                eprintln!("❌ Lookup failed: {}", e);
                std::process::exit(2);
            }
        },
        None => match directory.list_all(location).await {
            Ok(departments) => {
                tracing::info!("✅ Listed {} departments", departments.len());
                if args.json {
                    let items: Vec<_> = departments
                        .iter()
                        .map(|department| department_json(department, locale.as_ref()))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&items)?);
                } else if departments.is_empty() {
                    println!("📋 No departments found at {}", location);
                } else {
                    println!("📋 {} departments at {}:", departments.len(), location);
                    for department in &departments {
                        println!(
                            "  {}: {}",
                            department.key,
                            department.title_for(locale.as_ref())
                        );
                    }
                }
            }
            Err(e) => {
                tracing::error!("❌ Listing failed: {}", e);
                eprintln!("❌ Listing failed: {}", e);
                std::process::exit(2);
            }
        },
    }

    Ok(())
}

fn print_department(department: &Department, locale: Option<&Locale>) {
    println!("✅ Found department '{}'", department.key);
    println!("   Title: {}", department.title_for(locale));

    if !department.phone.is_empty() {
        println!("   Phone: {}", department.phone);
    }

    if !department.email.is_empty() {
        println!("   Email: {}", department.email);
    }
}

fn department_json(department: &Department, locale: Option<&Locale>) -> serde_json::Value {
    json!({
        "key": department.key,
        "title": department.title_for(locale),
        "phone": department.phone,
        "email": department.email,
    })
}
