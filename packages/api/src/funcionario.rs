//! Funcionário resource service, plus the advisory CPF duplicate check.

use crate::client::{expect_ok, http, url, Resource};
use crate::error::ApiError;
use crate::models::Funcionario;

const RESOURCE: Resource = Resource::new("funcionario", "id_funcionario");

/// All funcionários.
pub async fn get_funcionarios() -> Result<Vec<Funcionario>, ApiError> {
    RESOURCE.list().await
}

/// One funcionário by id; `Ok(None)` when no record matches.
pub async fn get_funcionario_by_id(id: i64) -> Result<Option<Funcionario>, ApiError> {
    RESOURCE.get_by_id(id).await
}

/// Create a funcionário, returning the generated id.
pub async fn create_funcionario(funcionario: &Funcionario) -> Result<i64, ApiError> {
    RESOURCE.create(funcionario).await
}

/// Update the funcionário with `id` (sent as a query parameter).
pub async fn update_funcionario(id: i64, funcionario: &Funcionario) -> Result<i64, ApiError> {
    RESOURCE.update(id, funcionario).await
}

/// Delete the funcionário with `id`.
pub async fn delete_funcionario(id: i64) -> Result<(), ApiError> {
    RESOURCE.delete(id).await
}

/// Result of the duplicate-CPF lookup.
///
/// The check is advisory: it improves the form experience but never blocks a
/// submit, and the backend remains the authority (a collision can still slip
/// in between check and save).
#[derive(Debug, Clone, PartialEq)]
pub struct CpfCheck {
    pub funcionario: Option<Funcionario>,
}

impl CpfCheck {
    /// Whether any funcionário already carries the CPF.
    pub fn exists(&self) -> bool {
        self.funcionario.is_some()
    }

    /// The conflicting record, excluding the one currently being edited:
    /// finding your own CPF while editing yourself is not a conflict.
    pub fn conflict_for(&self, editing: Option<i64>) -> Option<&Funcionario> {
        let found = self.funcionario.as_ref()?;
        match (editing, found.id_funcionario) {
            (Some(current), Some(hit)) if current == hit => None,
            _ => Some(found),
        }
    }
}

/// GET `funcionario/cpf?cpf=`. The backend answers with the (possibly empty)
/// list of funcionários holding that CPF; only the first is relevant.
pub async fn check_cpf_exists(cpf: &str) -> Result<CpfCheck, ApiError> {
    let response = http()
        .get(url("funcionario/cpf"))
        .query(&[("cpf", cpf)])
        .send()
        .await?;
    let response = expect_ok(response).await?;
    let matches = response
        .json::<Vec<Funcionario>>()
        .await
        .map_err(|_| ApiError::Decode)?;
    Ok(CpfCheck {
        funcionario: matches.into_iter().next(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Grupo;

    fn existing(id: i64) -> Funcionario {
        Funcionario {
            id_funcionario: Some(id),
            nome: "Pedro".to_string(),
            cpf: "12345678901".to_string(),
            matricula: "F-010".to_string(),
            telefone: None,
            senha: None,
            grupo: Grupo::AtendimentoCaixa,
        }
    }

    #[test]
    fn conflict_when_creating() {
        let check = CpfCheck {
            funcionario: Some(existing(10)),
        };
        assert!(check.exists());
        assert_eq!(
            check.conflict_for(None).unwrap().id_funcionario,
            Some(10)
        );
    }

    #[test]
    fn conflict_when_editing_other_record() {
        let check = CpfCheck {
            funcionario: Some(existing(10)),
        };
        assert!(check.conflict_for(Some(99)).is_some());
    }

    #[test]
    fn own_record_is_not_a_conflict() {
        let check = CpfCheck {
            funcionario: Some(existing(10)),
        };
        assert!(check.conflict_for(Some(10)).is_none());
    }

    #[test]
    fn no_match_never_conflicts() {
        let check = CpfCheck { funcionario: None };
        assert!(!check.exists());
        assert!(check.conflict_for(None).is_none());
        assert!(check.conflict_for(Some(1)).is_none());
    }
}
