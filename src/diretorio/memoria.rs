use crate::diretorio::{
    Diretorio, ErroDiretorio, Pagina, Result, UsuarioDiretorio,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// Diretório em memória com páginas fixas. Guarda os cursores com que foi
/// chamado, o que permite verificar a paginação nos testes.
///
/// As páginas são encadeadas pelos cursores `"1"`, `"2"`, ... a menos que
/// sejam criadas com [`DiretorioMemoria::com_cursores`].
#[derive(Debug, Default)]
pub struct DiretorioMemoria {
    paginas: Vec<Pagina>,
    falhar_na: Option<usize>,
    chamadas: Mutex<Vec<Option<String>>>,
}

impl DiretorioMemoria {
    /// Cria um diretório com as páginas dadas, encadeadas automaticamente.
    pub fn new(paginas: Vec<Vec<UsuarioDiretorio>>) -> Self {
        let total = paginas.len();
        let paginas = paginas
            .into_iter()
            .enumerate()
            .map(|(i, usuarios)| Pagina {
                usuarios,
                proximo: (i + 1 < total).then(|| (i + 1).to_string()),
            })
            .collect();

        Self {
            paginas,
            ..Default::default()
        }
    }

    /// Cria um diretório com as páginas exatamente como dadas. O cursor de
    /// cada página deve ser o que leva à página seguinte.
    pub fn com_cursores(paginas: Vec<Pagina>) -> Self {
        Self {
            paginas,
            ..Default::default()
        }
    }

    /// Faz a chamada de número `indice` (começando em zero) falhar.
    pub fn falhando_na(mut self, indice: usize) -> Self {
        self.falhar_na = Some(indice);
        self
    }

    /// Os cursores recebidos em cada chamada, em ordem.
    pub fn chamadas(&self) -> Vec<Option<String>> {
        self.chamadas.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Diretorio for DiretorioMemoria {
    async fn listar_usuarios(&self, cursor: Option<&str>) -> Result<Pagina> {
        let indice = {
            let mut chamadas = self
                .chamadas
                .lock()
                .map_err(|_| ErroDiretorio::Falha("lock envenenado".into()))?;
            chamadas.push(cursor.map(str::to_string));
            chamadas.len() - 1
        };

        if self.falhar_na == Some(indice) {
            return Err(ErroDiretorio::Falha(format!(
                "falha simulada na chamada {indice}"
            )));
        }

        let posicao = match cursor {
            None => 0,
            Some(cursor) => self
                .paginas
                .iter()
                .position(|p| p.proximo.as_deref() == Some(cursor))
                .map(|i| i + 1)
                .ok_or_else(|| {
                    ErroDiretorio::Falha(format!("cursor desconhecido {cursor:?}"))
                })?,
        };

        Ok(self.paginas.get(posicao).cloned().unwrap_or_default())
    }
}
