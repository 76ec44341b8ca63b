use tracing::info;

use super::colebrook::{solve_colebrook, ColebrookParams, FrictionError};

/// 레이놀즈수 하나에 대한 계산 결과 행.
#[derive(Debug, Clone, PartialEq)]
pub struct FrictionRow {
    pub reynolds: f64,
    pub outcome: Result<f64, FrictionError>,
}

/// 레이놀즈수 목록의 마찰계수 표. 입력 순서를 유지한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrictionTable {
    rows: Vec<FrictionRow>,
}

impl FrictionTable {
    pub fn rows(&self) -> &[FrictionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 주어진 레이놀즈수의 결과를 찾는다. 비트 단위로 같은 값만 일치한다.
    pub fn get(&self, reynolds: f64) -> Option<&Result<f64, FrictionError>> {
        self.rows
            .iter()
            .find(|row| row.reynolds.to_bits() == reynolds.to_bits())
            .map(|row| &row.outcome)
    }

    /// 수렴한 행만 (Re, f) 쌍으로 돌려준다.
    pub fn converged(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.rows
            .iter()
            .filter_map(|row| row.outcome.ok().map(|f| (row.reynolds, f)))
    }

    fn insert(&mut self, reynolds: f64, outcome: Result<f64, FrictionError>) {
        match self
            .rows
            .iter_mut()
            .find(|row| row.reynolds.to_bits() == reynolds.to_bits())
        {
            Some(row) => row.outcome = outcome,
            None => self.rows.push(FrictionRow { reynolds, outcome }),
        }
    }
}

/// 레이놀즈수 목록 각각에 대해 Colebrook 마찰계수를 계산한다.
///
/// 키 기반 맵과 같은 동작을 한다: 중복된 레이놀즈수는 하나의 행으로 합쳐지며
/// 행 위치는 처음 등장한 순서를 따른다. 개별 실패는 해당 행에 오류로 남고
/// 나머지 계산은 계속된다.
pub fn friction_factors(
    reynolds_numbers: &[f64],
    relative_roughness: f64,
    params: &ColebrookParams,
) -> FrictionTable {
    let mut table = FrictionTable::default();
    for &reynolds in reynolds_numbers {
        let outcome = solve_colebrook(reynolds, relative_roughness, params);
        table.insert(reynolds, outcome);
    }
    info!(
        requested = reynolds_numbers.len(),
        rows = table.len(),
        converged = table.converged().count(),
        "friction table computed"
    );
    table
}
