use drydock_core::ResolvedConfig;
use drydock_docker::command;
use drydock_docker::error::CredentialError;
use indexmap::IndexMap;

fn base_cfg() -> ResolvedConfig {
    ResolvedConfig {
        name: "cms-engine".to_owned(),
        image: "uberspace/homepage/cms-engine".to_owned(),
        container: "cms-engine".to_owned(),
        ..Default::default()
    }
}

// ── build ──

#[test]
fn build_tags_image_in_default_context() {
    let cmd = command::build(&base_cfg());
    assert_eq!(cmd, "docker build --tag 'uberspace/homepage/cms-engine' '.'");
}

#[test]
fn build_uses_configured_context() {
    let cfg = ResolvedConfig {
        context: "src".to_owned(),
        ..base_cfg()
    };
    let cmd = command::build(&cfg);
    assert_eq!(cmd, "docker build --tag 'uberspace/homepage/cms-engine' 'src'");
}

#[test]
fn build_no_cache_and_buildargs_in_declaration_order() {
    let cfg = ResolvedConfig {
        no_cache: true,
        buildargs: IndexMap::from([
            ("VERSION".to_owned(), "1.2".to_owned()),
            ("CHANNEL".to_owned(), "beta".to_owned()),
        ]),
        ..base_cfg()
    };
    let cmd = command::build(&cfg);
    assert_eq!(
        cmd,
        "docker build --no-cache --build-arg 'VERSION=1.2' --build-arg 'CHANNEL=beta' \
         --tag 'uberspace/homepage/cms-engine' '.'"
    );
}

// ── run ──

#[test]
fn run_volumes_and_envvars_in_declaration_order() {
    let cfg = ResolvedConfig {
        volumes: IndexMap::from([
            ("/input".to_owned(), "example/input".to_owned()),
            ("/output".to_owned(), "example/output".to_owned()),
        ]),
        envvars: IndexMap::from([
            ("term".to_owned(), Some("xterm".to_owned())),
            ("lang".to_owned(), None),
        ]),
        ..base_cfg()
    };
    let cmd = command::run(&cfg, false);
    assert_eq!(
        cmd,
        "docker run --rm --volume 'example/input:/input' --volume 'example/output:/output' \
         --env 'TERM=xterm' --env 'LANG' 'uberspace/homepage/cms-engine'"
    );
}

#[test]
fn run_envvar_names_are_uppercased() {
    let cfg = ResolvedConfig {
        envvars: IndexMap::from([("MiXeD_case".to_owned(), Some("1".to_owned()))]),
        ..base_cfg()
    };
    let cmd = command::run(&cfg, false);
    assert!(cmd.contains("--env 'MIXED_CASE=1'"));
}

#[test]
fn run_appends_command_when_not_interactive() {
    let cfg = ResolvedConfig {
        command: "build-site --verbose".to_owned(),
        ..base_cfg()
    };
    let cmd = command::run(&cfg, false);
    assert_eq!(
        cmd,
        "docker run --rm 'uberspace/homepage/cms-engine' build-site --verbose"
    );
}

#[test]
fn run_extra_arguments_pass_through_verbatim() {
    let cfg = ResolvedConfig {
        extra: "--network host".to_owned(),
        ..base_cfg()
    };
    let cmd = command::run(&cfg, false);
    assert_eq!(
        cmd,
        "docker run --rm --network host 'uberspace/homepage/cms-engine'"
    );
}

#[test]
fn run_interactive_attaches_terminal_with_default_shell() {
    let cmd = command::run(&base_cfg(), true);
    assert_eq!(
        cmd,
        "docker run --rm --interactive --tty --entrypoint '/bin/sh' \
         'uberspace/homepage/cms-engine'"
    );
}

#[test]
fn run_interactive_uses_configured_shell_and_drops_command() {
    let cfg = ResolvedConfig {
        shell: "/bin/bash".to_owned(),
        command: "build-site".to_owned(),
        ..base_cfg()
    };
    let cmd = command::run(&cfg, true);
    assert!(cmd.contains("--entrypoint '/bin/bash'"));
    assert!(!cmd.contains("build-site"));
}

// ── login ──

fn remote_cfg() -> ResolvedConfig {
    ResolvedConfig {
        remote: true,
        registry: "registry.uberspace.is".to_owned(),
        user: "robot".to_owned(),
        token: "s3cret".to_owned(),
        ..base_cfg()
    }
}

#[test]
fn login_passes_credentials_through_environment_only() {
    let login = command::login(&remote_cfg()).unwrap();

    assert_eq!(
        login.command,
        "docker login --username \"$DOCKER_USER\" --password \"$DOCKER_TOKEN\" \
         'registry.uberspace.is'"
    );
    assert_eq!(
        login.env,
        vec![
            ("DOCKER_USER".to_owned(), "robot".to_owned()),
            ("DOCKER_TOKEN".to_owned(), "s3cret".to_owned()),
        ]
    );
    // The secret itself never reaches the command string.
    assert!(!login.command.contains("s3cret"));
    assert!(!login.command.contains("robot"));
}

#[test]
fn login_names_the_missing_field() {
    let no_token = ResolvedConfig {
        token: String::new(),
        ..remote_cfg()
    };
    assert!(matches!(
        command::login(&no_token),
        Err(CredentialError::Missing { field: "token" })
    ));

    let no_user = ResolvedConfig {
        user: String::new(),
        ..remote_cfg()
    };
    assert!(matches!(
        command::login(&no_user),
        Err(CredentialError::Missing { field: "user" })
    ));

    let no_registry = ResolvedConfig {
        registry: String::new(),
        ..remote_cfg()
    };
    assert!(matches!(
        command::login(&no_registry),
        Err(CredentialError::Missing { field: "registry" })
    ));
}

#[test]
fn login_error_message_does_not_echo_values() {
    let err = command::login(&ResolvedConfig {
        token: String::new(),
        ..remote_cfg()
    })
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("token"));
    assert!(!message.contains("robot"));
}

// ── pull / push ──

#[test]
fn pull_and_push_reference_the_full_image() {
    let cfg = ResolvedConfig {
        image: "registry.uberspace.is/uberspace/homepage/cms-engine:v2".to_owned(),
        ..base_cfg()
    };
    assert_eq!(
        command::pull(&cfg),
        "docker pull 'registry.uberspace.is/uberspace/homepage/cms-engine:v2'"
    );
    assert_eq!(
        command::push(&cfg),
        "docker push 'registry.uberspace.is/uberspace/homepage/cms-engine:v2'"
    );
}
