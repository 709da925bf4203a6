pub mod liga_server;
