pub mod logo_server;
