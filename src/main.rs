use serial_probe::config::Config;
use serial_probe::{open_serial_port, run};
use serialport::{available_ports, SerialPort};
use std::env;
use std::io::stdout;

fn main() {
    env_logger::init();

    let mut config = Config::new();

    let args: Vec<String> = env::args().collect();
    if args.len() > 1 && args[1] != config.serial_port {
        config.serial_port = args[1].clone();
        config.save();
    }

    let mut serial_port: Box<dyn SerialPort>;

    if let Ok(p) = open_serial_port(&config.serial_port, config.baud_rate, config.timeout()) {
        serial_port = p;
    } else {
        eprintln!("Could not open serial port {}", config.serial_port);
        eprintln!("You can pass one of the following as argument:");
        if let Ok(serial_port_list) = available_ports() {
            for port in serial_port_list {
                println!("{}", port.port_name);
            }
        } else {
            eprintln!("Failed to get serial port list");
        }
        std::process::exit(1);
    }

    if let Err(e) = run(&mut serial_port, &config.query, &mut stdout()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
