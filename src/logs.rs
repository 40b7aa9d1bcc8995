use tracing_subscriber::EnvFilter;

/// Onde os logs vão parar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destino {
    /// CloudWatch já adiciona o horário e não entende cores.
    Lambda,
    Terminal,
}

/// Inicia o subscriber global. O nível vem de `RUST_LOG`, com `info` como
/// padrão.
pub fn iniciar(destino: Destino) {
    let filtro = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filtro);

    // Ignora o erro caso já exista um subscriber (ex.: nos testes)
    let _ = match destino {
        Destino::Lambda => builder
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .try_init(),
        Destino::Terminal => builder.try_init(),
    };
}
