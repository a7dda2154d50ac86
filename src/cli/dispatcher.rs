use crate::cli::interactive::InteractiveSession;
use crate::cli::main_types::{Commands, ConfigCommands};
use crate::cli::output::{io_error, write_notifications, write_view};
use crate::core::entry::Collection;
use crate::core::pager::Pager;
use crate::display::{DisplayOptions, MemorySurface, is_interactive_terminal};
use crate::error::{AppError, StorageError};
use crate::storage::collection::load_collection;
use crate::storage::config::Config;
use crate::utils::logging::VerboseLogger;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    display: DisplayOptions,
    logger: VerboseLogger,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        display: DisplayOptions,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            config_path,
            display,
            logger: VerboseLogger::new(verbose),
        }
    }

    fn log_verbose(&self, msg: &str) {
        self.logger.log(msg);
    }

    pub fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut err = io::stderr();
        self.dispatch_to(command, &mut out, &mut err)
    }

    /// Run `command`, writing the view to `out` and notifications to `err`.
    pub fn dispatch_to<W: Write, E: Write>(
        &self,
        command: Commands,
        out: &mut W,
        err: &mut E,
    ) -> Result<(), AppError> {
        match command {
            Commands::Show { file, page } => self.handle_show(&file, page, out),
            Commands::Search { file, query, page } => {
                self.handle_search(&file, &query, page, out, err)
            }
            Commands::Browse { file } => self.handle_browse(&file, out),
            Commands::Config { command } => self.handle_config_command(command, out),
        }
    }

    fn load(&self, file: &Path) -> Result<Collection, AppError> {
        self.log_verbose(&format!("Loading collection from {}", file.display()));
        let collection = load_collection(file)?;
        self.log_verbose(&format!("Loaded {} entries", collection.len()));
        Ok(collection)
    }

    fn new_pager<'a>(
        &self,
        collection: &'a Collection,
    ) -> Result<Pager<'a, MemorySurface>, AppError> {
        let surface = MemorySurface::with_selectors(self.config.regions.clone());
        Ok(Pager::new(collection, self.config.pager_options(), surface)?)
    }

    fn handle_show<W: Write>(&self, file: &Path, page: usize, out: &mut W) -> Result<(), AppError> {
        let collection = self.load(file)?;
        let mut pager = self.new_pager(&collection)?;
        pager.show_page(page);
        write_view(out, &pager, &self.display)
    }

    fn handle_search<W: Write, E: Write>(
        &self,
        file: &Path,
        query: &str,
        page: usize,
        out: &mut W,
        err: &mut E,
    ) -> Result<(), AppError> {
        let collection = self.load(file)?;
        let mut pager = self.new_pager(&collection)?;
        pager.show_page(1);

        let outcome = pager.search_students(query);
        self.log_verbose(&format!("Search for {:?}: {:?}", query, outcome));
        if pager.is_search_active() && page != 1 {
            pager.show_page(page);
        }

        write_notifications(err, &mut pager)?;
        write_view(out, &pager, &self.display)
    }

    fn handle_browse<W: Write>(&self, file: &Path, out: &mut W) -> Result<(), AppError> {
        let collection = self.load(file)?;
        let mut pager = self.new_pager(&collection)?;
        pager.show_page(1);

        let stdin = io::stdin();
        InteractiveSession::new(&mut pager, self.display.clone())
            .with_prompt(is_interactive_terminal())
            .run(stdin.lock(), out)
    }

    fn handle_config_command<W: Write>(
        &self,
        command: ConfigCommands,
        out: &mut W,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                self.log_verbose("Attempting config show command");
                let toml_content =
                    toml::to_string(&self.config).map_err(|e| StorageError::ConfigSaveFailed {
                        message: e.to_string(),
                    })?;

                writeln!(out, "Current Configuration:").map_err(io_error)?;
                writeln!(out, "=====================").map_err(io_error)?;
                write!(out, "{}", toml_content).map_err(io_error)?;
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                self.log_verbose(&format!(
                    "Attempting config set - key: {}, value: {}",
                    key, value
                ));
                // start from the file, not the flag and environment overrides
                let mut config = Config::load(self.config_path.clone())?;
                config.set_value(&key, &value)?;
                config.save(self.config_path.clone())?;
                writeln!(out, "✅ Set {} = {}", key, value).map_err(io_error)?;
                Ok(())
            }
            ConfigCommands::Path => {
                let path = match &self.config_path {
                    Some(path) => path.clone(),
                    None => Config::config_file_path()?,
                };
                writeln!(out, "{}", path.display()).map_err(io_error)?;
                Ok(())
            }
        }
    }
}
