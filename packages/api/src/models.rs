//! Wire types for the three managed entities.
//!
//! Ids are `Option` because the same struct travels both ways: a create
//! submits the record without an id and the backend answers with the
//! generated one. Optional ids and the write-only `senha` are skipped when
//! absent so create payloads stay minimal.

use serde::{Deserialize, Serialize};

use store::Grupo;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_cliente: Option<i64>,
    pub nome: String,
    /// 11 digits, unmasked.
    pub cpf: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Funcionario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_funcionario: Option<i64>,
    pub nome: String,
    /// 11 digits, unmasked. Uniqueness is checked advisorily before submit;
    /// the backend remains authoritative.
    pub cpf: String,
    pub matricula: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    /// Write-only: sent on create/update, never displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
    pub grupo: Grupo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_produto: Option<i64>,
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto: Option<String>,
    pub valor: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_omits_id_and_empty_optionals() {
        let cliente = Cliente {
            id_cliente: None,
            nome: "João".to_string(),
            cpf: "12345678901".to_string(),
            telefone: None,
        };
        let json = serde_json::to_value(&cliente).unwrap();
        assert!(json.get("id_cliente").is_none());
        assert!(json.get("telefone").is_none());
        assert_eq!(json["cpf"], "12345678901");
    }

    #[test]
    fn funcionario_senha_is_write_only_shaped() {
        let mut funcionario = Funcionario {
            id_funcionario: Some(7),
            nome: "Maria".to_string(),
            cpf: "98765432100".to_string(),
            matricula: "F-001".to_string(),
            telefone: Some("49999990000".to_string()),
            senha: Some("segredo".to_string()),
            grupo: Grupo::AtendimentoBalcao,
        };
        let json = serde_json::to_value(&funcionario).unwrap();
        assert_eq!(json["senha"], "segredo");
        assert_eq!(json["grupo"], 2);

        // A record echoed back without senha still deserializes.
        funcionario.senha = None;
        let json = serde_json::to_value(&funcionario).unwrap();
        assert!(json.get("senha").is_none());
        let back: Funcionario = serde_json::from_value(json).unwrap();
        assert!(back.senha.is_none());
    }

    #[test]
    fn produto_list_row_deserializes() {
        let produto: Produto = serde_json::from_str(
            r#"{"id_produto": 8, "nome": "Pastel de Calabresa", "descricao": "Tem calabresa", "valor": 30.0}"#,
        )
        .unwrap();
        assert_eq!(produto.id_produto, Some(8));
        assert!(produto.foto.is_none());
        assert_eq!(produto.valor, 30.0);
    }
}
