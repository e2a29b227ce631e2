mod server_launcher;

pub use server_launcher::ServerLauncher;
