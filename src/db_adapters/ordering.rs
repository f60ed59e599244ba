use sea_orm::{
    sea_query::{CaseStatement, Expr, SimpleExpr},
    ColumnTrait,
};
use uuid::Uuid;

/// Builds `CASE WHEN id = .. THEN .. ELSE position END` so that a whole batch of
/// positions is written by a single UPDATE statement.
pub(crate) fn position_case<C: ColumnTrait>(
    id_column: C,
    position_column: C,
    positions: &[(Uuid, i32)],
) -> SimpleExpr {
    positions
        .iter()
        .fold(CaseStatement::new(), |case, (id, position)| {
            case.case(id_column.eq(*id), *position)
        })
        .finally(Expr::col(position_column))
        .into()
}
