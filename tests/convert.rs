// std
use std::{fs, path::Path};
// crates.io
use tempfile::TempDir;
// cig
use cig::{generate_input, manifest::Manifest, mock, Error, Job, Template};

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
	let p = dir.join(name);

	fs::write(&p, content).unwrap();

	p
}

#[test]
fn timelock_lines_round_trip() {
	let dir = TempDir::new().unwrap();
	let beneficiaries = (0..17).map(mock::generate_address).collect::<Vec<_>>();
	let read_path = write(dir.path(), "beneficiaries.csv", &beneficiaries.join(","));
	let job = Job {
		read_path,
		write_path: dir.path().join("timelock.txt"),
		template: Template::PairWithConstant {
			token_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".into(),
		},
	};

	generate_input(&job).unwrap();

	let out = fs::read_to_string(&job.write_path).unwrap();
	let pairs = out
		.lines()
		.map(|l| {
			let (aux, token) = l.split_once("\",\"").unwrap();

			(aux.trim_start_matches('"').to_owned(), token.trim_end_matches('"').to_owned())
		})
		.collect::<Vec<_>>();

	assert_eq!(out.matches('\n').count(), beneficiaries.len());
	assert_eq!(pairs.len(), beneficiaries.len());

	for ((aux, token), b) in pairs.iter().zip(&beneficiaries) {
		assert_eq!(aux, "0x5FbDB2315678afecb367f032d93F642f64180aa3");
		assert_eq!(token, b);
	}
}

#[test]
fn transfer_lines() {
	let dir = TempDir::new().unwrap();
	let read_path = write(dir.path(), "transfers.csv", "0xa,1000\r\n0xb,20\r\n0xc,3.5\r\n");
	let job = Job {
		read_path,
		write_path: dir.path().join("transfers.txt"),
		template: Template::PairFromRow,
	};

	generate_input(&job).unwrap();

	assert_eq!(
		fs::read_to_string(&job.write_path).unwrap(),
		"\"0xa\",1000\n\"0xb\",20\n\"0xc\",3.5\n"
	);
}

#[test]
fn conversions_are_idempotent() {
	let dir = TempDir::new().unwrap();
	let read_path = write(dir.path(), "whitelist.csv", "0xa,0xb,0xc\n");
	let job = Job {
		read_path,
		write_path: dir.path().join("whitelist.txt"),
		template: Template::ArrayLiteral,
	};

	generate_input(&job).unwrap();

	let first = fs::read(&job.write_path).unwrap();

	generate_input(&job).unwrap();

	assert_eq!(fs::read(&job.write_path).unwrap(), first);
	assert_eq!(first, br#"["0xa","0xb","0xc"]"#);
}

#[test]
fn mock_whitelist_of_250() {
	let dir = TempDir::new().unwrap();
	let csv = dir.path().join("mock.csv");

	mock::generate_addresses(250, &csv).unwrap();

	let content = fs::read_to_string(&csv).unwrap();
	let tokens = content.trim_end().split(',').collect::<Vec<_>>();

	assert_eq!(tokens.len(), 250);

	for (i, t) in tokens.iter().enumerate() {
		assert_eq!(t.len(), 42);
		assert_eq!(*t, format!("0x{i:0>40}"));
	}

	let job = Job {
		read_path: csv,
		write_path: dir.path().join("mock.txt"),
		template: Template::ArrayLiteral,
	};

	generate_input(&job).unwrap();

	let array = fs::read_to_string(&job.write_path).unwrap();
	let quoted = tokens.iter().map(|t| format!("\"{t}\"")).collect::<Vec<_>>();

	assert_eq!(array, format!("[{}]", quoted.join(",")));
}

#[test]
fn missing_input() {
	let dir = TempDir::new().unwrap();
	let job = Job {
		read_path: dir.path().join("missing.csv"),
		write_path: dir.path().join("out.txt"),
		template: Template::PairFromRow,
	};

	assert!(matches!(generate_input(&job), Err(Error::FileNotFound { .. })));
	assert!(!job.write_path.exists());
}

#[test]
fn manifest_from_disk() {
	let dir = TempDir::new().unwrap();
	let d = dir.path().display();
	let read = write(dir.path(), "angle.csv", "0xb1,0xb2\n");
	let manifest = write(
		dir.path(),
		"jobs.toml",
		&format!(
			r#"
[[job]]
template = "pair_with_constant"
read_path = "{}"
write_path = "{d}/write/angle.txt"
token_address = "0x0"
"#,
			read.display()
		),
	);

	Manifest::load(&manifest).unwrap().run().unwrap();

	assert_eq!(
		fs::read_to_string(dir.path().join("write").join("angle.txt")).unwrap(),
		"\"0x0\",\"0xb1\"\n\"0x0\",\"0xb2\"\n"
	);
}
