//! Clean architecture: domain <- application <- infrastructure / interface adapters.

pub const TEMPLATES: &[(&str, &str)] = &[
    ("main", MAIN),
    ("domain_entity", DOMAIN_ENTITY),
    ("domain_repository", DOMAIN_REPOSITORY),
    ("use_case", USE_CASE),
    ("infrastructure_repository", INFRASTRUCTURE_REPOSITORY),
    ("infrastructure_model", INFRASTRUCTURE_MODEL),
    ("interface_schema", INTERFACE_SCHEMA),
    ("web_app", WEB_APP),
    ("database_config", DATABASE_CONFIG),
    ("package", PACKAGE),
];

const MAIN: &str = r#"# {{ file_path }}
from src.application.use_cases.{{ module_name }}_use_cases import Create{{ class_name }}UseCase, Get{{ class_name }}UseCase
from src.infrastructure.database.database import get_db
from src.infrastructure.database.{{ module_name }}_repository import SQLAlchemy{{ class_name }}Repository
from src.infrastructure.web.fastapi_app import create_app

# Composition root
db = next(get_db())
repository = SQLAlchemy{{ class_name }}Repository(db)

app = create_app(Create{{ class_name }}UseCase(repository), Get{{ class_name }}UseCase(repository))

if __name__ == "__main__":
    import uvicorn

    uvicorn.run(app, host="0.0.0.0", port=8000)
"#;

const DOMAIN_ENTITY: &str = r#"# {{ file_path }}
from dataclasses import dataclass, field
from datetime import datetime
from typing import Optional


@dataclass
class {{ class_name }}:
    id: Optional[int] = None
    created_at: datetime = field(default_factory=datetime.utcnow)
    updated_at: datetime = field(default_factory=datetime.utcnow)

    def __repr__(self):
        return f"{{ class_name }}(id={self.id})"
"#;

const DOMAIN_REPOSITORY: &str = r#"# {{ file_path }}
from abc import ABC, abstractmethod
from typing import List, Optional

from src.domain.entities.{{ module_name }} import {{ class_name }}


class {{ class_name }}Repository(ABC):
    @abstractmethod
    def save(self, {{ module_name }}: {{ class_name }}) -> {{ class_name }}:
        raise NotImplementedError

    @abstractmethod
    def get_by_id(self, {{ module_name }}_id: int) -> Optional[{{ class_name }}]:
        raise NotImplementedError

    @abstractmethod
    def get_all(self) -> List[{{ class_name }}]:
        raise NotImplementedError

    @abstractmethod
    def delete(self, {{ module_name }}_id: int) -> bool:
        raise NotImplementedError
"#;

const USE_CASE: &str = r#"# {{ file_path }}
from typing import List, Optional

from src.domain.entities.{{ module_name }} import {{ class_name }}
from src.domain.repositories.{{ module_name }}_repository import {{ class_name }}Repository


class Create{{ class_name }}UseCase:
    def __init__(self, repository: {{ class_name }}Repository):
        self.repository = repository

    def execute(self, data: dict) -> {{ class_name }}:
        return self.repository.save({{ class_name }}(**data))


class Get{{ class_name }}UseCase:
    def __init__(self, repository: {{ class_name }}Repository):
        self.repository = repository

    def get_by_id(self, {{ module_name }}_id: int) -> Optional[{{ class_name }}]:
        return self.repository.get_by_id({{ module_name }}_id)

    def get_all(self) -> List[{{ class_name }}]:
        return self.repository.get_all()
"#;

const INFRASTRUCTURE_REPOSITORY: &str = r#"# {{ file_path }}
from typing import List, Optional

from sqlalchemy.orm import Session

from src.domain.entities.{{ module_name }} import {{ class_name }}
from src.domain.repositories.{{ module_name }}_repository import {{ class_name }}Repository
from src.infrastructure.database.models import SQL{{ class_name }}


def _to_entity(row: SQL{{ class_name }}) -> {{ class_name }}:
    return {{ class_name }}(id=row.id, created_at=row.created_at, updated_at=row.updated_at)


class SQLAlchemy{{ class_name }}Repository({{ class_name }}Repository):
    def __init__(self, db: Session):
        self.db = db

    def save(self, {{ module_name }}: {{ class_name }}) -> {{ class_name }}:
        row = SQL{{ class_name }}(**{{ module_name }}.__dict__)
        self.db.add(row)
        self.db.commit()
        self.db.refresh(row)
        return _to_entity(row)

    def get_by_id(self, {{ module_name }}_id: int) -> Optional[{{ class_name }}]:
        row = self.db.query(SQL{{ class_name }}).filter(SQL{{ class_name }}.id == {{ module_name }}_id).first()
        return _to_entity(row) if row else None

    def get_all(self) -> List[{{ class_name }}]:
        return [_to_entity(row) for row in self.db.query(SQL{{ class_name }}).all()]

    def delete(self, {{ module_name }}_id: int) -> bool:
        row = self.db.query(SQL{{ class_name }}).filter(SQL{{ class_name }}.id == {{ module_name }}_id).first()
        if not row:
            return False
        self.db.delete(row)
        self.db.commit()
        return True
"#;

const INFRASTRUCTURE_MODEL: &str = r#"# {{ file_path }}
from datetime import datetime

from sqlalchemy import Column, DateTime, Integer

from src.infrastructure.database.database import Base


class SQL{{ class_name }}(Base):
    __tablename__ = "{{ table_name }}"

    id = Column(Integer, primary_key=True, index=True)
    created_at = Column(DateTime, default=datetime.utcnow)
    updated_at = Column(DateTime, default=datetime.utcnow, onupdate=datetime.utcnow)

    def __repr__(self):
        return f"<SQL{{ class_name }}(id={self.id})>"
"#;

const INTERFACE_SCHEMA: &str = r#"# {{ file_path }}
from datetime import datetime

from pydantic import BaseModel


class {{ class_name }}Create(BaseModel):
    pass


class {{ class_name }}Response(BaseModel):
    id: int
    created_at: datetime
    updated_at: datetime

    class Config:
        from_attributes = True
"#;

const WEB_APP: &str = r#"# {{ file_path }}
from fastapi import FastAPI, HTTPException

from src.application.use_cases.{{ module_name }}_use_cases import Create{{ class_name }}UseCase, Get{{ class_name }}UseCase
from src.interface_adapters.schemas.{{ module_name }} import {{ class_name }}Create, {{ class_name }}Response


def create_app(create_uc: Create{{ class_name }}UseCase, get_uc: Get{{ class_name }}UseCase) -> FastAPI:
    app = FastAPI(title="{{ class_name }} API", version="1.0.0")

    @app.post("/{{ table_name }}", response_model={{ class_name }}Response)
    def create_{{ module_name }}(data: {{ class_name }}Create):
        try:
            return {{ class_name }}Response.model_validate(create_uc.execute(data.model_dump()))
        except ValueError as e:
            raise HTTPException(status_code=400, detail=str(e))

    @app.get("/{{ table_name }}/{{{ module_name }}_id}", response_model={{ class_name }}Response)
    def get_{{ module_name }}({{ module_name }}_id: int):
        {{ module_name }} = get_uc.get_by_id({{ module_name }}_id)
        if not {{ module_name }}:
            raise HTTPException(status_code=404, detail="{{ class_name }} not found")
        return {{ class_name }}Response.model_validate({{ module_name }})

    @app.get("/{{ table_name }}", response_model=list[{{ class_name }}Response])
    def list_{{ table_name }}():
        return [{{ class_name }}Response.model_validate(item) for item in get_uc.get_all()]

    @app.get("/")
    def read_root():
        return {"message": "FastAPI with Clean Architecture"}

    return app
"#;

const DATABASE_CONFIG: &str = r#"# {{ file_path }}
from sqlalchemy import create_engine
from sqlalchemy.orm import declarative_base, sessionmaker

SQLALCHEMY_DATABASE_URL = "sqlite:///./app.db"

engine = create_engine(SQLALCHEMY_DATABASE_URL, connect_args={"check_same_thread": False})
SessionLocal = sessionmaker(autocommit=False, autoflush=False, bind=engine)
Base = declarative_base()


def get_db():
    db = SessionLocal()
    try:
        yield db
    finally:
        db.close()
"#;

const PACKAGE: &str = "# {{ file_path }}\n";
